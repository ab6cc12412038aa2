//! PokeAPI gateway: HTTP client, wire types, and derived item accessors.
//!
//! Everything in this crate is read-only with respect to the remote catalog;
//! both gateway operations are idempotent lookups.

pub mod client;
pub mod error;
pub mod types;

pub use client::{CatalogGateway, PokeApiClient};
pub use error::ApiError;
pub use types::{ListingPage, NamedRef, Pokemon, PokemonStub, SpriteSet, StatEntry, TypeSlot};
