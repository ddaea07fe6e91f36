//! staticd - Minimal static file responder
//!
//! Core library for request parsing, path resolution and response framing.

pub mod config;
pub mod http;
pub mod server;
