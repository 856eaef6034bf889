use dioxus::prelude::*;

use crate::components::input::{ErrorMessage, InputType, ValidatedInput};
use crate::features::contact::ContactField;
use crate::utils::validation::FieldStatus;

#[derive(Props, PartialEq, Clone)]
pub struct ContactTextFieldProps {
    pub field: ContactField,
    pub input_type: InputType,
    pub value: String,
    pub status: FieldStatus,
    pub error: Option<String>,
    pub on_change: EventHandler<String>,
    pub on_blur: EventHandler<()>,
}

/// Label, input and inline error for one text field
#[component]
pub fn ContactTextField(props: ContactTextFieldProps) -> Element {
    let field = props.field;

    rsx! {
        div {
            class: "flex flex-col flex-1",
            label {
                r#for: field.dom_id(),
                class: "mb-1",
                "{field.label()}"
            }
            ValidatedInput {
                id: field.dom_id().to_string(),
                name: field.name().to_string(),
                value: props.value,
                input_type: props.input_type,
                status: props.status,
                mask: field.mask(),
                on_change: props.on_change,
                on_blur: props.on_blur,
            }
            ErrorMessage { message: props.error }
        }
    }
}
