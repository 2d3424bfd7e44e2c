//! JSON wire types for the `/predict` endpoint.
mod request;
mod response;

pub use request::*;
pub use response::*;
