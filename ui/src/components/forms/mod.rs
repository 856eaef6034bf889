pub mod contact_form;
pub mod contact_text_field;
pub mod gender_radio_group;
pub mod option_multi_select;
pub mod submit_button;

pub use contact_form::*;
pub use contact_text_field::*;
pub use gender_radio_group::*;
pub use option_multi_select::*;
pub use submit_button::*;
