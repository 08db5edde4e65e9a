use dioxus::prelude::*;
use reset_password::{config, ResetPasswordPage};

fn main() {
    dioxus::logger::initialize_default();
    config::load_settings();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        ResetPasswordPage {}
    }
}
