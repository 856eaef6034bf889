use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ErrorMessageProps {
    pub message: Option<String>,
}

/// Inline validation message under a field
#[component]
pub fn ErrorMessage(props: ErrorMessageProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            p {
                class: "text-red-600 relative",
                "role": "alert",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
