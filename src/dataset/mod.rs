//! Landmark datasets as recorded by the capture page.
//!
//! ## Core Types
//!
//! - [`Samples`] — labeled fixed-width feature rows, ready for fitting
//! - [`Frame`] — one labeled landmark snapshot at one frame index
//! - [`DatasetError`] — why a CSV could not be turned into samples
//!
//! Static datasets map one CSV row to one sample. Motion datasets map
//! [`MOTION_WINDOW`](crate::MOTION_WINDOW) consecutive frames of one label
//! to one sample via [`windows`].
mod error;
mod frame;
mod samples;
mod split;
mod table;
mod window;

pub use error::*;
pub use frame::*;
pub use samples::*;
pub use split::*;
pub use window::*;

/// Column holding the class label in every dataset.
pub const LABEL_COLUMN: &str = "label";
/// Column holding the frame index in motion datasets.
pub const FRAME_COLUMN: &str = "frame";
