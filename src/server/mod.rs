//! Protocol-agnostic accept loop.
//!
//! `listener` owns the listening socket and spawns one task per accepted
//! connection; what happens on that connection is up to the `Service` it is
//! given.

pub mod listener;
pub mod service;

pub use service::Service;
