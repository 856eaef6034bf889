pub mod lookup;
pub mod mask;
pub mod options;
pub mod schema;
pub mod types;

pub use lookup::resolve_address;
pub use mask::InputMask;
pub use options::*;
pub use schema::*;
pub use types::*;
