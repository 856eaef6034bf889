use dioxus::prelude::*;

use crate::components::{
    display::{AddressLookupStatus, SubmissionNotice},
    forms::{ContactTextField, GenderRadioGroup, OptionMultiSelect, SubmitButton},
    input::{ErrorMessage, InputType},
};
use crate::features::contact::*;
use crate::services::cep::ViaCepClient;
use crate::services::config::ContactConfig;
use crate::utils::validation::FieldStatus;

#[cfg(feature = "web")]
use crate::console_log;
use crate::{console_error, console_json, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct ContactFormComponentProps {
    pub state: Signal<ContactState>,
    pub dispatch: EventHandler<ContactAction>,
    pub config: ContactConfig,
}

/// Pairs of text fields rendered side by side, in order
const TEXT_ROWS: [[(ContactField, InputType); 2]; 3] = [
    [
        (ContactField::Name, InputType::Text),
        (ContactField::Email, InputType::Email),
    ],
    [
        (ContactField::Phone, InputType::Tel),
        (ContactField::BirthDate, InputType::Text),
    ],
    [
        (ContactField::PostalCode, InputType::Text),
        (ContactField::Address, InputType::Text),
    ],
];

#[component]
pub fn ContactFormComponent(props: ContactFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let lookup_config = props.config.lookup.clone();

    // One client per form so its address cache survives re-renders
    let lookup_client = use_signal(move || match ViaCepClient::try_new(&lookup_config) {
        Ok(client) => Some(client),
        Err(e) => {
            console_error!("[ContactForm] CEP lookup disabled: {}", e);
            None
        }
    });

    let status_of = move |field: ContactField| {
        let current = state();
        FieldStatus::from_error(current.validated.contains(&field), current.error_for(field))
    };
    let error_of = move |field: ContactField| state().error_for(field).map(str::to_string);

    // Fire-and-forget address lookup once the CEP field loses focus
    let lookup_cep = move || {
        let Some(cep) = state().cep_lookup_target() else {
            return;
        };

        #[cfg(feature = "web")]
        {
            let Some(client) = (*lookup_client.peek()).clone() else {
                return;
            };
            dispatch.call(ContactAction::SetLookingUpCep(true));
            spawn(async move {
                match resolve_address(&client, &cep).await {
                    Some(action) => dispatch.call(action),
                    None => console_log!("Recusado"),
                }
                dispatch.call(ContactAction::SetLookingUpCep(false));
            });
        }

        #[cfg(not(feature = "web"))]
        {
            let _ = &lookup_client;
            console_warn!("[ContactForm] CEP lookup for {} skipped outside the web build", cep);
        }
    };

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        let before = state().submission_count;
        dispatch.call(ContactAction::Submit);

        let current = state();
        match &current.last_submission {
            Some(payload) if current.submission_count > before => {
                console_json!("Formulário enviado", payload);
            }
            _ => {
                console_warn!(
                    "[ContactForm] Submission rejected: {} field(s) invalid",
                    current.errors.len()
                );
            }
        }
    };

    rsx! {
        form {
            class: "flex flex-col gap-3 flex-1",
            novalidate: true,
            onsubmit: on_submit,

            for row in TEXT_ROWS {
                div {
                    class: "flex gap-4",
                    for (field, input_type) in row {
                        ContactTextField {
                            key: "{field}",
                            field: field,
                            input_type: input_type,
                            value: state().form.text(field).unwrap_or_default().to_string(),
                            status: status_of(field),
                            error: error_of(field),
                            on_change: move |value: String| {
                                dispatch.call(ContactAction::SetText(field, value));
                            },
                            on_blur: move |_| {
                                dispatch.call(ContactAction::Blur(field));
                                if field == ContactField::PostalCode {
                                    lookup_cep();
                                }
                            },
                        }
                    }
                }
            }

            AddressLookupStatus {
                cep: state().form.postal_code,
                pending: state().pending_lookups,
            }

            div {
                class: "flex gap-4",
                ContactTextField {
                    field: ContactField::Locality,
                    input_type: InputType::Text,
                    value: state().form.locality,
                    status: status_of(ContactField::Locality),
                    error: error_of(ContactField::Locality),
                    on_change: move |value: String| {
                        dispatch.call(ContactAction::SetText(ContactField::Locality, value));
                    },
                    on_blur: move |_| dispatch.call(ContactAction::Blur(ContactField::Locality)),
                }

                div {
                    class: "flex flex-col flex-1",
                    label {
                        r#for: ContactField::Selection.dom_id(),
                        class: "mb-1",
                        {ContactField::Selection.label()}
                    }
                    OptionMultiSelect {
                        id: ContactField::Selection.dom_id().to_string(),
                        name: ContactField::Selection.name().to_string(),
                        options: props.config.options.clone(),
                        selected: state().form.selection,
                        on_add: move |option: SelectOption| dispatch.call(ContactAction::AddOption(option)),
                        on_remove: move |value: String| dispatch.call(ContactAction::RemoveOption(value)),
                        on_clear: move |_| dispatch.call(ContactAction::ClearSelection),
                        on_blur: move |_| dispatch.call(ContactAction::Blur(ContactField::Selection)),
                    }
                    ErrorMessage { message: error_of(ContactField::Selection) }
                }
            }

            div {
                class: "flex gap-4",
                div {
                    class: "flex flex-col flex-1",
                    label {
                        class: "mb-1",
                        {ContactField::Gender.label()}
                    }
                    GenderRadioGroup {
                        selected: state().form.gender,
                        on_change: move |gender: Gender| dispatch.call(ContactAction::SetGender(gender)),
                        on_blur: move |_| dispatch.call(ContactAction::Blur(ContactField::Gender)),
                    }
                    ErrorMessage { message: error_of(ContactField::Gender) }
                }
            }

            SubmitButton { on_reset: move |_| dispatch.call(ContactAction::Reset) }

            if let Some(payload) = state().last_submission {
                SubmissionNotice {
                    name: payload.name,
                    count: state().submission_count,
                }
            }
        }
    }
}
