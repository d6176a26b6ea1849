use dioxus::prelude::*;

use super::{FIELD_INPUT_STYLE, FIELD_LABEL_STYLE};

#[component]
pub fn TextInputField(
    label: String,
    name: String,
    #[props(default = "text".to_string())] input_type: String,
    value: String,
    #[props(default)] required: bool,
    oninput: Callback<String>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column;",
            label { r#for: "{name}", style: FIELD_LABEL_STYLE, "{label}" }
            input {
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                style: FIELD_INPUT_STYLE,
                required,
                value: "{value}",
                oninput: move |e: FormEvent| oninput(e.value()),
            }
        }
    }
}

#[component]
pub fn TextAreaField(label: String, name: String, value: String, oninput: Callback<String>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column;",
            label { r#for: "{name}", style: FIELD_LABEL_STYLE, "{label}" }
            textarea {
                id: "{name}",
                name: "{name}",
                rows: "6",
                style: "width: 100%; padding: 8px 10px; border: 1px solid #D1D5DB; border-radius: 6px; font-size: 15px; box-sizing: border-box; resize: vertical;",
                value: "{value}",
                oninput: move |e: FormEvent| oninput(e.value()),
            }
        }
    }
}
