//! Network Module
//!
//! HTTP server and request handling.
//!
//! ## Architecture
//! - tiny_http owns sockets, framing and keep-alive
//! - Single acceptor thread moving requests onto a bounded queue
//! - Worker thread pool draining the queue
//! - Requests routed through the Dispatcher

mod server;
mod worker;

pub use server::{Server, ShutdownHandle};
