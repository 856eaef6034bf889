//! Infrastructure Services
//!
//! - **cep**: ViaCEP postal-code lookup client with an in-memory cache
//! - **config**: Configuration for the lookup endpoint and the option list
//!
//! The services are WASM-first, using async traits without Send bounds.

pub mod cep;
pub mod config;
