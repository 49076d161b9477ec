//! HTTP Server
//!
//! Receives requests from tiny_http and hands them to worker threads.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam::channel::{self, TrySendError};

use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::{RestError, Result};
use crate::protocol::{into_reply, Response};
use super::worker;

/// How long the acceptor waits for a request before re-checking shutdown
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// HTTP server for restkv
pub struct Server {
    config: Config,
    dispatcher: Arc<Dispatcher>,
    http: tiny_http::Server,
    shutdown: Arc<AtomicBool>,
}

/// Cloneable handle that stops a running [`Server`]
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
}

impl ShutdownHandle {
    /// Ask the server to stop receiving and drain its workers
    pub fn shutdown(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_shutdown(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

impl Server {
    /// Validate the config and bind the listener
    pub fn bind(config: Config, dispatcher: Arc<Dispatcher>) -> Result<Self> {
        config.validate()?;

        let http = tiny_http::Server::http(&config.listen_addr).map_err(|e| {
            RestError::Network(format!("failed to bind {}: {}", config.listen_addr, e))
        })?;

        Ok(Self {
            config,
            dispatcher,
            http,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Address the listener is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.http
            .server_addr()
            .to_ip()
            .ok_or_else(|| RestError::Network("listener is not bound to an IP address".to_string()))
    }

    /// Handle for stopping the server, from this or another thread
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            flag: Arc::clone(&self.shutdown),
        }
    }

    /// Start the server (blocking)
    ///
    /// One acceptor (this thread) feeds a fixed pool of workers through a
    /// bounded queue. When the queue is full the request is answered with
    /// 503. Returns after shutdown once every worker has drained the queue.
    pub fn run(&self) -> Result<()> {
        let (tx, rx) = channel::bounded::<tiny_http::Request>(self.config.queue_capacity);

        let workers = (0..self.config.worker_threads)
            .map(|id| {
                worker::spawn(
                    id,
                    rx.clone(),
                    Arc::clone(&self.dispatcher),
                    self.config.max_body_size,
                )
            })
            .collect::<std::io::Result<Vec<_>>>()?;
        drop(rx);

        tracing::info!(
            "Listening on {} with {} workers",
            self.local_addr()?,
            workers.len()
        );

        while !self.shutdown.load(Ordering::Acquire) {
            match self.http.recv_timeout(ACCEPT_POLL_INTERVAL) {
                Ok(Some(request)) => match tx.try_send(request) {
                    Ok(()) => {}
                    Err(TrySendError::Full(request)) => {
                        tracing::warn!(
                            "Request queue full, rejecting {} {}",
                            request.method(),
                            request.url()
                        );
                        if let Err(e) = request.respond(into_reply(Response::busy())) {
                            tracing::debug!("Failed to send busy response: {}", e);
                        }
                    }
                    Err(TrySendError::Disconnected(_)) => {
                        tracing::warn!("All workers exited, stopping acceptor");
                        break;
                    }
                },
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Receive failed: {}", e);
                }
            }
        }

        // Closing the queue lets idle workers fall out of their loop
        drop(tx);
        for worker in workers {
            if worker.join().is_err() {
                tracing::warn!("Worker thread panicked");
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}
