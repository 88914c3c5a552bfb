//! HTTP protocol implementation.
//!
//! This module implements a one-request-per-connection HTTP/1.1 static file
//! server.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection request-response state machine
//! - **`parser`**: Parses the request line out of the bytes received
//! - **`request`**: HTTP request representation and method classification
//! - **`resolver`**: Maps request URIs onto files inside the document root
//! - **`files`**: Routes requests and implements `Service` for the accept loop
//! - **`headers`**: Ordered response header set
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//! - **`encoding`**: gzip body compression
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One bounded read from the socket
//!        └──────┬──────┘
//!               │ Request line parsed      (nothing read → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │    Routing       │ ← GET / POST / anything else
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!            Closed
//! ```
//!
//! Any error on the way ends the connection early; the stream is dropped and
//! the error is logged by the task that owns it.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use staticd::config::Config;
//! use staticd::http::files::StaticFiles;
//! use staticd::server::listener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::load()?;
//!     let files = Arc::new(StaticFiles::from_config(&cfg));
//!     listener::run(&cfg.server, files).await
//! }
//! ```

pub mod connection;
pub mod encoding;
pub mod files;
pub mod headers;
pub mod mime;
pub mod parser;
pub mod request;
pub mod resolver;
pub mod response;
pub mod writer;
