use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct AddressLookupStatusProps {
    /// CEP currently in the draft
    pub cep: String,
    /// Lookups still in flight
    pub pending: u32,
}

/// Live region shown under the CEP row while ViaCEP is being queried.
/// Renders nothing once every lookup has finished.
#[component]
pub fn AddressLookupStatus(props: AddressLookupStatusProps) -> Element {
    if props.pending == 0 {
        return rsx! {};
    }

    rsx! {
        p {
            class: "address-lookup-status",
            "aria-live": "polite",
            "⏳ Buscando endereço do CEP {props.cep}..."
            if props.pending > 1 {
                span { " ({props.pending} consultas)" }
            }
        }
    }
}
