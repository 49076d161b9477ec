//! restkv CLI Client
//!
//! Command-line interface for interacting with a restkv server.

use clap::{Parser, Subcommand};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use restkv::protocol::CONTENT_TYPE_JSON;

/// restkv CLI
#[derive(Parser, Debug)]
#[command(name = "restkv-cli")]
#[command(about = "CLI for the restkv users/posts server")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every record in a collection
    List {
        /// Collection name (users, posts)
        collection: String,
    },

    /// Get one record by id
    Get {
        /// Collection name (users, posts)
        collection: String,

        /// Record id
        id: String,
    },

    /// Create or replace a record from a JSON object
    Create {
        /// Collection name (users, posts)
        collection: String,

        /// Record as JSON, e.g. '{"id":"2","name":"alice"}'
        json: String,
    },
}

fn main() {
    let args = Args::parse();
    let client = Client::new();
    let base = format!("http://{}", args.server);

    let request = match args.command {
        Commands::List { collection } => client.get(format!("{}/{}", base, collection)),
        Commands::Get { collection, id } => client.get(format!("{}/{}/{}", base, collection, id)),
        Commands::Create { collection, json } => client
            .post(format!("{}/{}", base, collection))
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(json),
    };

    match run(request) {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Send one request and print the response; `Ok(false)` on a non-2xx status
fn run(request: RequestBuilder) -> reqwest::Result<bool> {
    let response = request.send()?;
    let status = response.status();

    println!("{}", status);
    println!("{}", response.text()?);

    Ok(status.is_success())
}
