//! Core domain entities representing the business data model.
//!
//! The service persists a single entity: the [`ShortLink`] mapping a short
//! key to its target URL. Creation input and partial updates use separate
//! structs (`NewShortLink`, `ShortLinkPatch`) so the repository contract
//! makes clear which fields the caller controls.

pub mod link;

pub use link::{NewShortLink, ShortLink, ShortLinkPatch};
