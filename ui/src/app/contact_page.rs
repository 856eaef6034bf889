use crate::console_info;
use dioxus::prelude::*;

use crate::components::forms::ContactFormComponent;
use crate::components::layout::FormContainer;
use crate::features::contact::{ContactAction, ContactState};
use crate::services::config::get_global_config;

const CONTACT_FORM_CSS: Asset = asset!("/assets/styling/contact_form.css");

#[component]
pub fn ContactPage() -> Element {
    // Created empty on mount; nothing outlives the page
    let mut state = use_signal(ContactState::default);
    let config = use_hook(get_global_config);

    use_effect(move || {
        console_info!("[ContactPage] Contact form mounted");
    });

    // Dispatch function for actions - in-place reduction keeps Signal reactivity
    let dispatch = EventHandler::new(move |action: ContactAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_FORM_CSS }

        FormContainer {
            title: "Formulário".to_string(),
            ContactFormComponent {
                state: state,
                dispatch: dispatch,
                config: config,
            }
        }
    }
}
