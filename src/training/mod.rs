//! Offline jobs that fit and persist the three classifiers.
//!
//! ## Core Types
//!
//! - [`Args`] — optional input CSV and output artifact overrides
//! - [`Trainer`] — load, split, fit, evaluate, save for one [`Gesture`](crate::gesture::Gesture)
//! - [`Evaluation`] — held-out scores of a finished job
mod args;
mod evaluation;
mod trainer;

pub use args::*;
pub use evaluation::*;
pub use trainer::*;
