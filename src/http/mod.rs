//! HTTP protocol implementation.
//!
//! This module implements just enough of HTTP/1.1 to hand static files to a
//! client: one request line in, one response out, then the connection closes.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Extracts the request line from received bytes
//! - **`request`**: Request line representation
//! - **`resolve`**: Maps a request path to a file path and MIME type
//! - **`mime`**: MIME type detection based on file extensions
//! - **`loader`**: Reads file contents from disk
//! - **`response`**: HTTP response representation
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitingRequest  │ ← Single receive (up to 1024 bytes)
//!        └──────┬───────────┘
//!               │ Bytes received           (0 bytes / error → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   ParsingLine    │ ← Tokenize the request line
//!        └──────┬───────────┘
//!               │ Request                  (malformed → Responding 404)
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolving     │ ← Path and MIME type
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Load file, frame and send response
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use staticd::http::connection::Connection;
//! use staticd::http::loader::ContentLoader;
//! use staticd::http::mime::MimeTable;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8002").await?;
//!     let mimes = Arc::new(MimeTable::new());
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let mut conn = Connection::new(socket, mimes.clone(), ContentLoader::current_dir());
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod connection;
pub mod loader;
pub mod mime;
pub mod parser;
pub mod request;
pub mod resolve;
pub mod response;
pub mod writer;
