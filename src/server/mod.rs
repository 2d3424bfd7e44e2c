//! HTTP service for live gesture prediction.
//!
//! ## Core Types
//!
//! - [`Args`] — listening port and artifact directory
//! - [`Server`] — actix-web application over the loaded [`Models`](crate::gesture::Models)
//!
//! Handlers and pages are registered through [`routes`] so tests can mount the
//! same application without binding a socket.
mod args;
mod handlers;
mod pages;
mod server;

pub use args::*;
pub use server::*;
