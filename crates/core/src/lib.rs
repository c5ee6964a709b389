//! Domain building blocks for the engagement board.
//!
//! Everything in this crate is storage-agnostic: shared types, the error
//! taxonomy, validation rules, pagination and the list fingerprint. The
//! store, engagement services and HTTP layer all build on it.

pub mod clock;
pub mod comments;
pub mod error;
pub mod fingerprint;
pub mod pagination;
pub mod reactions;
pub mod summary;
pub mod types;
