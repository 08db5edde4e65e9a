use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Field label bound to the input whose `id` is `html_for`.
///
/// `invalid` tints the label along with its input.
#[component]
pub fn Label(
    html_for: String,
    #[props(default = false)] invalid: bool,
    children: Element,
) -> Element {
    let class = if invalid { "field-label invalid" } else { "field-label" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label {
            html_for: html_for,
            class: class,
            {children}
        }
    }
}
