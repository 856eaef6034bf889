// Postal-code (CEP) lookup against the ViaCEP web service

pub mod client;
pub mod errors;
pub mod types;

pub use client::{decode_response, normalize_cep, CepLookup, ViaCepClient};
pub use errors::{CepError, CepResult};
pub use types::ViaCepResponse;
