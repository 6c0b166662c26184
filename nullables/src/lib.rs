//! Nullable infrastructure for deterministic testing.
//!
//! External collaborators are abstracted behind traits. The
//! implementations here keep everything in memory, never touch the
//! filesystem, and can be inspected or broken on purpose from tests.

pub mod store;

pub use store::NullElectionStore;
