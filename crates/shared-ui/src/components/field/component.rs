use dioxus::prelude::*;

use crate::components::{Input, Label};

/// A labelled input with its validation message underneath.
///
/// `name` doubles as the input `id` so the label targets it.
#[component]
pub fn RenderField(
    name: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: String,
    #[props(!optional)] error: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let invalid = error.is_some();
    let error_id = format!("{name}-error");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field", "data-invalid": invalid,
            Label { html_for: name.clone(), invalid: invalid, "{label}" }
            Input {
                id: name.clone(),
                name: name.clone(),
                input_type: input_type,
                value: value,
                autocomplete: autocomplete,
                invalid: invalid,
                disabled: disabled,
                on_input: move |evt| on_input.call(evt),
            }
            if let Some(message) = error {
                div { id: "{error_id}", class: "field-error", "{message}" }
            }
        }
    }
}
