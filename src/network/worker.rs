//! Worker threads
//!
//! Each worker takes queued requests one at a time, reads the body,
//! dispatches it and writes the reply.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam::channel::Receiver;

use crate::dispatcher::Dispatcher;
use crate::protocol::{into_reply, read_request, rejection};

/// Start worker `id` draining `rx` until the queue is closed
pub(crate) fn spawn(
    id: usize,
    rx: Receiver<tiny_http::Request>,
    dispatcher: Arc<Dispatcher>,
    max_body_size: usize,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(format!("restkv-worker-{}", id))
        .spawn(move || {
            for request in rx.iter() {
                serve(request, &dispatcher, max_body_size);
            }
            tracing::trace!("Worker {} exiting", id);
        })
}

/// Answer one request on the current worker
fn serve(mut incoming: tiny_http::Request, dispatcher: &Dispatcher, max_body_size: usize) {
    let peer = incoming
        .remote_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let response = match read_request(&mut incoming, max_body_size) {
        Ok(request) => {
            tracing::trace!("Received {} {} from {}", request.method, request.path, peer);
            dispatcher.dispatch(&request)
        }
        Err(e) => {
            tracing::warn!("Unreadable request from {}: {}", peer, e);
            rejection(&e)
        }
    };

    if let Err(e) = incoming.respond(into_reply(response)) {
        tracing::debug!("Client {} went away before the reply was sent: {}", peer, e);
    }
}
