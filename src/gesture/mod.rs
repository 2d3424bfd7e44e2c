//! Request-time classifier selection.
//!
//! ## Core Types
//!
//! - [`Gesture`] — which of the three classifiers a request calls for
//! - [`Models`] — the three loaded forests, immutable after startup
//! - [`Prediction`] — label and confidence, or the null prediction
//! - [`Rejection`] — why a request could not be scored
mod gesture;
mod models;
mod prediction;

pub use gesture::*;
pub use models::*;
pub use prediction::*;
