//! restkv Server Binary
//!
//! Starts the HTTP server for restkv.

use std::sync::Arc;

use clap::Parser;
use restkv::network::Server;
use restkv::{Collections, Config, Dispatcher};
use tracing_subscriber::{fmt, EnvFilter};

/// restkv Server
#[derive(Parser, Debug)]
#[command(name = "restkv-server")]
#[command(about = "In-memory users/posts store over HTTP")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Worker threads serving connections
    #[arg(short, long, default_value = "8")]
    workers: usize,

    /// Maximum requests waiting for a worker
    #[arg(short, long, default_value = "1024")]
    queue_capacity: usize,

    /// Maximum request body size in KB
    #[arg(short = 'b', long, default_value = "1024")]
    max_body_kb: usize,

    /// Start with empty collections instead of the fixture records
    #[arg(long)]
    no_seed: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,restkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("restkv Server v{}", restkv::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let config = match Config::builder()
        .listen_addr(&args.listen)
        .worker_threads(args.workers)
        .queue_capacity(args.queue_capacity)
        .seed_fixtures(!args.no_seed)
        .max_body_kb(args.max_body_kb)
    {
        Ok(builder) => builder.build(),
        Err(e) => {
            tracing::error!("Invalid arguments: {}", e);
            std::process::exit(1);
        }
    };

    let collections = if config.seed_fixtures {
        Collections::seeded()
    } else {
        Collections::new()
    };
    tracing::info!(
        "Collections ready: {} users, {} posts",
        collections.users.len(),
        collections.posts.len()
    );

    let dispatcher = Arc::new(Dispatcher::new(&collections));

    let server = match Server::bind(config, dispatcher) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
