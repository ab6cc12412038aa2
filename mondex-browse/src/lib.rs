//! Incremental catalog browsing: pagination, per-item detail resolution,
//! and the session that ties them to a gateway.
//!
//! The moving parts are deliberately separate state machines — the
//! [`Paginator`] serializes page loads, the [`DetailLedger`] deduplicates
//! detail fetches, and [`BrowseSession`] owns both plus the in-flight
//! futures, so every piece of state has exactly one mutator.

pub mod details;
pub mod pager;
pub mod session;
pub mod trigger;

pub use details::{DetailLedger, DetailRecord};
pub use pager::{FetchState, PageRequest, Paginator};
pub use session::BrowseSession;
pub use trigger::ScrollTrigger;
