use dioxus::prelude::*;

/// A single-line input. Pass `input_type: "password"` for masked entry.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: String,
    #[props(default = false)] invalid: bool,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            name: name,
            value: value,
            placeholder: placeholder,
            autocomplete: autocomplete,
            disabled: disabled,
            aria_invalid: if invalid { "true" } else { "false" },
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}
