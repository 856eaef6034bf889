//! This crate contains the contact form: its validation schema, input masks,
//! postal-code lookup client and the Dioxus components that render it.

pub mod app;
pub use app::ContactPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
