pub mod form_container;

pub use form_container::*;
