use crate::metrics::Confusion;
use crate::metrics::Report;

/// Held-out results of one training job.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub train: usize,
    pub test: usize,
    pub accuracy: f32,
    pub confusion: Confusion,
}

impl Evaluation {
    pub fn report(&self) -> Report {
        Report::new(&self.confusion)
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Accuracy: {:.2}%", self.accuracy * 100.0)
    }
}
