//! The user-curated collection: an ordered, unique-by-id sequence of items
//! mirrored into a single persisted slot on every mutation.

pub mod engine;
pub mod store;

pub use engine::Collection;
pub use store::{CollectionStore, StoreError};
