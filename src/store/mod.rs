//! Store Module
//!
//! In-memory, thread-safe storage for resource collections.
//!
//! ## Responsibilities
//! - Point lookups and full snapshots under a shared lock
//! - Inserts under an exclusive lock (last write wins)
//! - One independent store per collection
//!
//! ## Data Structure Choice
//! A `HashMap` wrapped in `parking_lot::RwLock`:
//! - Enumeration order is unspecified, callers must not rely on it
//! - The lock and the map are one private pair, only lock-scoped
//!   accessors are exposed

mod table;
mod collections;

pub use table::Store;
pub use collections::Collections;
