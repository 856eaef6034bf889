use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SubmitButtonProps {
    pub on_reset: EventHandler<()>,
}

/// Submit plus a secondary button that empties the form
#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    let on_reset = props.on_reset;

    rsx! {
        div {
            class: "button-section flex gap-3",
            button {
                r#type: "submit",
                class: "submit-button",
                "Enviar"
            }
            button {
                r#type: "button",
                class: "reset-button",
                onclick: move |_| on_reset.call(()),
                "Limpar"
            }
        }
    }
}
