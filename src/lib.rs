//! Lost Ark sibling lookup SDK for Rust.
//!
//! Looks up every character on the same account as a given character through
//! the Lost Ark developer API (`/characters/{name}/siblings`). The caller
//! supplies the API key per request; the client never stores it.
//!
//! # Quick start
//!
//! ```no_run
//! use lostark_siblings::{ApiKey, SiblingsClient};
//!
//! # async fn example() -> lostark_siblings::Result<()> {
//! let client = SiblingsClient::new()?;
//! let key = ApiKey::new("my-api-key").expect("key is not blank");
//!
//! for character in client.fetch_siblings("모코코", &key).await? {
//!     println!("{} ({})", character.character_name, character.item_avg_level);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{SiblingsClient, SiblingsClientBuilder};
pub use error::{Result, SiblingsError};
pub use models::{ApiKey, CharacterRecord};
