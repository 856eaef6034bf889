use dioxus::prelude::*;

use crate::features::contact::Gender;

#[derive(Props, PartialEq, Clone)]
pub struct GenderRadioGroupProps {
    pub selected: Option<Gender>,
    pub on_change: EventHandler<Gender>,
    pub on_blur: EventHandler<()>,
}

#[component]
pub fn GenderRadioGroup(props: GenderRadioGroupProps) -> Element {
    let on_change = props.on_change;
    let on_blur = props.on_blur;

    rsx! {
        div {
            class: "flex gap-3",
            for (index, gender) in Gender::ALL.into_iter().enumerate() {
                div {
                    key: "{gender.value()}",
                    class: "flex gap-1",
                    input {
                        r#type: "radio",
                        id: format!("radio{}", index + 1),
                        name: "sexo",
                        value: gender.value(),
                        checked: props.selected == Some(gender),
                        onchange: move |_| on_change.call(gender),
                        onblur: move |_| on_blur.call(()),
                    }
                    label {
                        r#for: format!("radio{}", index + 1),
                        "{gender.value()}"
                    }
                }
            }
        }
    }
}
