//! staticd - concurrent static file server
//!
//! Core library for the HTTP pipeline and the accept loop.

pub mod config;
pub mod http;
pub mod server;
