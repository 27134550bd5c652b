//! File Digest Service: Hash Uploaded Files and Authenticate Users over HTTP
//!
//! This application serves a small HTTP API around a from-scratch SHA-256 implementation. Clients
//! upload a file and get its digest back as 64 hex characters; an optional attack-simulation flag
//! tampers with the file before hashing to show how the digest changes. A second pair of routes
//! registers and authenticates users, storing password digests in a line-oriented file.
//!
//! ## Design Overview
//! - **Digest**: The SHA-256 engine lives in the `digest` module and has no dependencies.
//! - **Store**: Registered users are kept in a JSON-lines file by the `store` module.
//! - **Service**: The `service` module wires both into an axum router.
//!
//! ## Dependencies
//! - **`axum`** and **`tower-http`**: HTTP routing, multipart uploads and CORS.
//! - **`tokio`**: Asynchronous runtime for the server and file I/O.
//! - **`log` and `env_logger`**: For structured logging instead of `println!`.
//! - **`clap`**: For parsing command-line arguments to configure the application.
//! - **`dotenv`**: For loading environment variables from a `.env` file.
//! - **`serde_json`** and **`chrono`**: User records and their timestamps.
//!
//! ## Usage
//! 1. Configure the application using either a `.env` file or command-line arguments:
//!    - **Using a `.env` file**: Create a `.env` file in the project root with:
//!      ```env
//!      HOST=127.0.0.1
//!      PORT=3000
//!      USERS_FILE=data/users.jsonl
//!      ```
//!    - **Using CLI arguments**: Pass arguments when running the application (see below).
//! 2. Run the server:
//!    ```sh
//!    cargo run -- --port 3000 --users-file data/users.jsonl
//!    ```
//! 3. Upload a file:
//!    ```sh
//!    curl -F file=@hello.txt -F isAttacked=false http://localhost:3000/upload
//!    ```
//! 4. Or hash a local file without starting the server:
//!    ```sh
//!    cargo run -- --digest-file hello.txt
//!    ```
//! 5. Logs will be output to the console, controlled by the `RUST_LOG` environment variable.
//!    Add `--log-file` (or `LOG_FILE`) to keep a timestamped copy on disk:
//!    ```sh
//!    export RUST_LOG=info
//!    cargo run -- --log-file logs/app.log
//!    ```

use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use dotenv::dotenv;
use file_digest_service::digest::{digest_hex, TextEncoding};
use file_digest_service::logging;
use file_digest_service::service::state::DEFAULT_MAX_UPLOAD_BYTES;
use file_digest_service::service::{router, AppState};
use file_digest_service::store::UserStore;
use log::info;
use std::path::PathBuf;

/// Command-line arguments for configuring the File Digest Service.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the HTTP server to.
    #[clap(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[clap(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Line-oriented file holding registered users (created if missing).
    #[clap(long, env = "USERS_FILE", default_value = "data/users.jsonl")]
    users_file: PathBuf,

    /// Largest accepted request body, uploads included, in bytes.
    #[clap(long, env = "MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,

    /// How passwords are turned into bytes before hashing.
    #[clap(long, env = "TEXT_ENCODING", value_enum, default_value_t = TextEncoding::Latin1)]
    text_encoding: TextEncoding,

    /// Also append timestamped log lines to this file (e.g. "logs/app.log").
    #[clap(long, env = "LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Print the SHA-256 of this file and exit instead of serving.
    #[clap(long)]
    digest_file: Option<PathBuf>,
}

/// Starts the HTTP server, or hashes a single file when `--digest-file` is given.
///
/// # Returns
/// - `Ok(())` when the server shuts down or the file digest was printed.
/// - `Err(anyhow::Error)` if the user file cannot be loaded, the address cannot be bound, or the
///   file to hash cannot be read.
#[tokio::main]
async fn main() -> AnyhowResult<()> {
    // Load environment variables from .env file (if present)
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    logging::init(args.log_file.as_deref())?;

    if let Some(path) = &args.digest_file {
        let contents = tokio::fs::read(path)
            .await
            .context(format!("Failed to read {}", path.display()))?;
        println!("{}  {}", digest_hex(&contents), path.display());
        return Ok(());
    }

    let users = UserStore::open(&args.users_file)
        .await
        .context("Failed to open user store")?;
    let state = AppState::new(users, args.text_encoding).with_max_upload_bytes(args.max_upload_bytes);
    info!(
        "Password encoding: {}, upload limit: {} bytes",
        args.text_encoding, args.max_upload_bytes
    );

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port))
        .await
        .context(format!("Failed to bind {}:{}", args.host, args.port))?;
    info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
