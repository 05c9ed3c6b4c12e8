//! Cards and the card catalog.
//!
//! - `Card`: immutable suit + rank value
//! - `CardCatalog`: duplicate-free set of cards supplied at battle start

mod card;
mod catalog;

pub use card::{Card, Rank, Suit};
pub use catalog::{AssetRef, CardCatalog, CatalogEntry};
