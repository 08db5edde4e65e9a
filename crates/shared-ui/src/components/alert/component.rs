use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCircleExclamation;
use dioxus_free_icons::Icon;

/// Error banner for messages that belong to the whole form rather than a field.
#[component]
pub fn Alert(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "alert", None, false),
        Attribute::new("role", "alert", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged,
            span { class: "alert-icon",
                Icon { width: 16, height: 16, icon: FaCircleExclamation }
            }
            div { class: "alert-body", {children} }
        }
    }
}
