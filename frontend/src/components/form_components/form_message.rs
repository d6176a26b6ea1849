use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum FormMessage {
    Success(String),
    Failure(String),
}

#[component]
pub fn FormMessageView(message: ReadSignal<Option<FormMessage>>) -> Element {
    let (text, color, background) = match message.read().clone() {
        None => return rsx! {},
        Some(FormMessage::Success(text)) => (text, "#065F46", "#ECFDF5"),
        Some(FormMessage::Failure(text)) => (text, "#991B1B", "#FEF2F2"),
    };
    rsx! {
        p {
            role: "status",
            style: "margin: 0; padding: 10px 14px; border-radius: 6px; font-size: 14px; color: {color}; background-color: {background};",
            "{text}"
        }
    }
}
