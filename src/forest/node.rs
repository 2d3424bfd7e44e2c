use crate::Feature;
use crate::Probability;

/// A tree node, addressed by index into its tree's node table.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Rows with `row[feature] <= threshold` descend left, the rest right.
    Split {
        feature: usize,
        threshold: Feature,
        left: usize,
        right: usize,
    },
    /// Class distribution of the training rows that reached this leaf.
    Leaf(Vec<Probability>),
}

impl Node {
    pub fn leaf(counts: &[usize]) -> Self {
        let total = counts.iter().sum::<usize>().max(1) as Probability;
        Self::Leaf(counts.iter().map(|&c| c as Probability / total).collect())
    }
}
