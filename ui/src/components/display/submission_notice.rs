use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SubmissionNoticeProps {
    pub name: String,
    pub count: u32,
}

#[component]
pub fn SubmissionNotice(props: SubmissionNoticeProps) -> Element {
    rsx! {
        div {
            class: "submission-notice",
            "✓ Obrigado, {props.name}! Formulário enviado."
            if props.count > 1 {
                span {
                    class: "submission-count",
                    " ({props.count} envios nesta sessão)"
                }
            }
        }
    }
}
