use dioxus::prelude::*;

use super::{FIELD_INPUT_STYLE, FIELD_LABEL_STYLE};

/// A single-choice select. An empty `value` shows the placeholder entry.
#[component]
pub fn SelectField(label: String, name: String, value: String, options: Vec<String>, onchange: Callback<String>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column;",
            label { r#for: "{name}", style: FIELD_LABEL_STYLE, "{label}" }
            select {
                id: "{name}",
                name: "{name}",
                style: FIELD_INPUT_STYLE,
                onchange: move |e: FormEvent| onchange(e.value()),
                option { value: "", selected: value.is_empty(), "選択してください" }
                for choice in options {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: choice == value,
                        "{choice}"
                    }
                }
            }
        }
    }
}
