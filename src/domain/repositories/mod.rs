//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; the concrete
//! implementation lives in `crate::infrastructure::persistence`. Mock
//! implementations are auto-generated via `mockall` for unit tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
