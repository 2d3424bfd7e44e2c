//! CART random forest with class-probability output.
//!
//! ## Core Types
//!
//! - [`Forest`] — bagged ensemble of [`Tree`]s over labeled [`Samples`](crate::dataset::Samples)
//! - [`Params`] — tree count, depth limit, seed
//! - [`ForestError`] — fitting, inference, and artifact failures
//!
//! Forests are persisted with [`Forest::save`] and restored with
//! [`Forest::load`] using a big-endian binary layout.
mod disk;
mod error;
mod forest;
mod node;
mod params;
mod tree;

pub use error::*;
pub use forest::*;
pub use node::*;
pub use params::*;
pub use tree::*;
