pub mod address_lookup_status;
pub mod submission_notice;

pub use address_lookup_status::*;
pub use submission_notice::*;
