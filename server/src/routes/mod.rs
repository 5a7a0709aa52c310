pub mod characters;
pub mod page;
