use dioxus::prelude::*;

use crate::features::contact::{find_option, remaining_options, SelectOption};
use crate::utils::validation::select_control_style;

#[derive(Props, PartialEq, Clone)]
pub struct OptionMultiSelectProps {
    pub id: String,
    pub name: String,
    pub options: Vec<SelectOption>,
    pub selected: Vec<SelectOption>,
    pub on_add: EventHandler<SelectOption>,
    pub on_remove: EventHandler<String>,
    pub on_clear: EventHandler<()>,
    pub on_blur: EventHandler<()>,
}

/// Multi-select rendered as removable chips plus a picker of the remaining options
#[component]
pub fn OptionMultiSelect(props: OptionMultiSelectProps) -> Element {
    let mut focused = use_signal(|| false);
    let mut hovered = use_signal(|| false);

    let on_add = props.on_add;
    let on_remove = props.on_remove;
    let on_clear = props.on_clear;
    let on_blur = props.on_blur;

    let options = props.options.clone();
    let remaining: Vec<SelectOption> = remaining_options(&props.options, &props.selected)
        .cloned()
        .collect();
    let picker_disabled = remaining.is_empty();
    let has_selection = !props.selected.is_empty();
    let picker_label = if picker_disabled {
        "Nenhuma opção restante"
    } else {
        "Selecione..."
    };

    rsx! {
        div {
            class: "multi-select",
            style: select_control_style(focused(), hovered()),
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            div {
                class: "multi-select-values",
                for chosen in props.selected.iter() {
                    SelectedChip {
                        key: "{chosen.value}",
                        option: chosen.clone(),
                        on_remove: on_remove,
                    }
                }
            }

            select {
                id: "{props.id}",
                name: "{props.name}",
                class: "multi-select-picker",
                value: "",
                disabled: picker_disabled,
                onfocus: move |_| focused.set(true),
                onblur: move |_| {
                    focused.set(false);
                    on_blur.call(());
                },
                onchange: move |event| {
                    if let Some(picked) = find_option(&options, &event.value()) {
                        on_add.call(picked.clone());
                    }
                },
                option {
                    value: "",
                    disabled: true,
                    selected: true,
                    "{picker_label}"
                }
                for entry in remaining.iter() {
                    option {
                        key: "{entry.value}",
                        value: "{entry.value}",
                        "{entry.label}"
                    }
                }
            }

            if has_selection {
                button {
                    r#type: "button",
                    class: "multi-select-clear",
                    title: "Limpar seleção",
                    onclick: move |_| on_clear.call(()),
                    "×"
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct SelectedChipProps {
    option: SelectOption,
    on_remove: EventHandler<String>,
}

#[component]
fn SelectedChip(props: SelectedChipProps) -> Element {
    let value = props.option.value.clone();
    let on_remove = props.on_remove;

    rsx! {
        span {
            class: "multi-select-chip",
            "{props.option.label}"
            button {
                r#type: "button",
                class: "multi-select-chip-remove",
                title: "Remover {props.option.label}",
                onclick: move |_| on_remove.call(value.clone()),
                "×"
            }
        }
    }
}
