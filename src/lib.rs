//! # restkv
//!
//! A thread-safe in-memory resource store behind a minimal REST dispatcher:
//! - One generic store per collection (`users`, `posts`)
//! - Shared/exclusive locking around each collection's mapping
//! - Explicit route table, no regex engine
//! - HTTP/1.1 via tiny_http, served by a blocking worker pool
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │        (tiny_http acceptor + worker thread pool)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Request
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Dispatcher                               │
//! │          (method + path pattern → store action)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Store<User> │          │ Store<Post> │
//!   │  (RwLock)   │          │  (RwLock)   │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod resource;
pub mod store;
pub mod dispatcher;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RestError, Result};
pub use config::Config;
pub use dispatcher::Dispatcher;
pub use resource::{Post, Resource, User};
pub use store::{Collections, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of restkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
