use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FormContainerProps {
    pub title: String,
    pub children: Element,
}

/// Page chrome: coloured header and a raised card holding the form
#[component]
pub fn FormContainer(props: FormContainerProps) -> Element {
    rsx! {
        div {
            class: "flex flex-col h-full min-h-screen",
            header {
                class: "page-header",
                h1 {
                    class: "page-title",
                    "{props.title}"
                }
            }
            div {
                class: "page-body",
                div {
                    class: "form-card",
                    {props.children}
                }
            }
        }
    }
}
