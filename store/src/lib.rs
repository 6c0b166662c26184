//! Abstract persistence traits for ballot elections.
//!
//! Durable storage is supplied by the host (a ledger, a database, an
//! in-memory map in tests). The election crate depends only on these
//! traits and hands them opaque encoded snapshots.

pub mod election;
pub mod error;

pub use election::ElectionStore;
pub use error::StoreError;
