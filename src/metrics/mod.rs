//! Held-out evaluation for trained forests.
//!
//! - [`accuracy`] — share of exact label matches
//! - [`Report`] — per-class precision, recall, F1, and support
//! - [`Confusion`] — actual-by-predicted counts with a terminal heatmap
mod confusion;
mod report;

pub use confusion::*;
pub use report::*;

/// Share of predictions equal to the truth. Zero when there is nothing to score.
pub fn accuracy<S: AsRef<str>>(truth: &[S], predicted: &[S]) -> f32 {
    if truth.is_empty() {
        return 0.0;
    }
    truth
        .iter()
        .zip(predicted)
        .filter(|(t, p)| t.as_ref() == p.as_ref())
        .count() as f32
        / truth.len() as f32
}
