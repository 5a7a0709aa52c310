pub mod api_key;
pub mod character;

pub use api_key::*;
pub use character::*;
