pub mod error_message;
pub mod validated_input;

pub use error_message::ErrorMessage;
pub use validated_input::{InputType, ValidatedInput};
