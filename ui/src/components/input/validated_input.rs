use dioxus::prelude::*;

use crate::features::contact::InputMask;
use crate::utils::validation::{field_class, field_style, FieldStatus};

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Email,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub name: String,
    pub value: String,
    pub input_type: InputType,
    pub status: FieldStatus,
    /// Masked inputs get a numeric keyboard on mobile; formatting happens in the reducer
    pub mask: Option<InputMask>,
    pub on_change: EventHandler<String>,
    pub on_blur: EventHandler<()>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let on_change = props.on_change;
    let on_blur = props.on_blur;
    let input_mode = if props.mask.is_some() { "numeric" } else { "text" };

    rsx! {
        input {
            id: "{props.id}",
            name: "{props.name}",
            class: field_class(props.status),
            style: field_style(props.status),
            r#type: props.input_type.as_str(),
            "inputmode": input_mode,
            autocomplete: "off",
            value: "{props.value}",
            "aria-invalid": props.status == FieldStatus::Invalid,
            oninput: move |event| on_change.call(event.value()),
            onblur: move |_| on_blur.call(()),
        }
    }
}
