//! In-memory customer store
//!
//! Implements the `CustomerStore` contract over `RwLock`-guarded maps.
//! Score writes are replace-on-write, so at most one score is ever current
//! per customer. Useful for tests, demos, and as the reference semantics
//! for a relational backend.

pub mod memory;

pub use memory::MemoryStore;
