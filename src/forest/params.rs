/// Hyperparameters for [`Forest::fit`](super::Forest::fit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Number of bootstrapped trees.
    pub trees: usize,
    /// Depth limit per tree; `None` grows until leaves are pure.
    pub max_depth: Option<usize>,
    /// Tree `i` draws from a generator seeded with `seed + i`.
    pub seed: u64,
}

impl Params {
    pub fn new(trees: usize, seed: u64) -> Self {
        Self {
            trees,
            max_depth: None,
            seed,
        }
    }
    pub fn with_depth(self, max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..self
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new(100, crate::TRAINING_SEED)
    }
}
