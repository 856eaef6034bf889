//! User Interface Components
//!
//! Dioxus components for the contact form:
//!
//! - **forms**: the contact form, its text fields, option multi-select and radio group
//! - **display**: lookup progress and submission notices
//! - **input**: masked/validated inputs and inline error messages
//! - **layout**: page chrome around the form

pub mod display;
pub mod forms;
pub mod input;
pub mod layout;
