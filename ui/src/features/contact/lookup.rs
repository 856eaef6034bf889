use tracing::warn;

use super::types::ContactAction;
use crate::services::cep::CepLookup;

/// Resolve a CEP into the action that fills address and locality.
/// Failures are logged and swallowed; the caller leaves the draft untouched.
pub async fn resolve_address<L: CepLookup + ?Sized>(lookup: &L, cep: &str) -> Option<ContactAction> {
    match lookup.lookup(cep).await {
        Ok(address) => Some(ContactAction::ApplyAddress(address)),
        Err(e) => {
            warn!("Recusado: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contact::{CepAddress, ContactField, ContactState};
    use crate::services::cep::{normalize_cep, CepError, CepResult};
    use async_trait::async_trait;
    use std::cell::Cell;

    /// In-memory lookup with a single known CEP
    struct FakeLookup {
        calls: Cell<u32>,
    }

    impl FakeLookup {
        fn new() -> Self {
            Self { calls: Cell::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl CepLookup for FakeLookup {
        async fn lookup(&self, cep: &str) -> CepResult<CepAddress> {
            self.calls.set(self.calls.get() + 1);
            let digits = normalize_cep(cep)?;
            if digits == "01001000" {
                Ok(CepAddress {
                    cep: "01001-000".to_string(),
                    logradouro: "Praça da Sé".to_string(),
                    localidade: "São Paulo".to_string(),
                    bairro: "Sé".to_string(),
                    uf: "SP".to_string(),
                })
            } else {
                Err(CepError::NotFound { cep: digits })
            }
        }
    }

    fn state_with_cep(cep: &str) -> ContactState {
        let mut state = ContactState::default();
        state.reduce_in_place(ContactAction::SetText(ContactField::PostalCode, cep.to_string()));
        state.reduce_in_place(ContactAction::Blur(ContactField::PostalCode));
        state
    }

    #[tokio::test]
    async fn test_lookup_fills_address_and_locality() {
        let lookup = FakeLookup::new();
        let mut state = state_with_cep("01001000");

        let cep = state.cep_lookup_target().unwrap();
        let action = resolve_address(&lookup, &cep).await.unwrap();
        state.reduce_in_place(action);

        assert_eq!(state.form.address, "Praça da Sé");
        assert_eq!(state.form.locality, "São Paulo");
        assert_eq!(lookup.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_unknown_cep_leaves_draft_unchanged() {
        let lookup = FakeLookup::new();
        let mut state = state_with_cep("99999999");
        state.reduce_in_place(ContactAction::SetText(ContactField::Address, "Rua A".to_string()));
        let before = state.clone();

        let cep = state.cep_lookup_target().unwrap();
        if let Some(action) = resolve_address(&lookup, &cep).await {
            state.reduce_in_place(action);
        }

        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn test_malformed_cep_yields_no_action() {
        let lookup = FakeLookup::new();
        assert!(resolve_address(&lookup, "123").await.is_none());
        assert_eq!(lookup.calls.get(), 1);
    }
}
