use super::ForestError;
use super::Params;
use super::Tree;
use crate::Feature;
use crate::Probability;
use crate::dataset::Samples;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// A bagged ensemble of CART trees.
///
/// Class probabilities are the mean of the leaf distributions each tree
/// assigns to a row, so they always sum to one. Classes are the sorted unique
/// training labels and index every probability vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Forest {
    features: usize,
    classes: Vec<String>,
    trees: Vec<Tree>,
}

impl Forest {
    /// Fits `params.trees` trees in parallel. Tree `i` is seeded with
    /// `params.seed + i`, so the result does not depend on scheduling.
    pub fn fit(samples: &Samples, params: Params) -> Result<Self, ForestError> {
        if samples.is_empty() {
            return Err(ForestError::Empty);
        }
        let features = samples.width();
        if let Some((row, r)) = samples
            .rows()
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != features)
        {
            return Err(ForestError::Ragged {
                row,
                expected: features,
                actual: r.len(),
            });
        }
        if let Some((row, feature)) = samples.rows().iter().enumerate().find_map(|(i, r)| {
            r.iter().position(|x| !x.is_finite()).map(|j| (i, j))
        }) {
            return Err(ForestError::NonFinite { row, feature });
        }
        let classes = samples
            .labels()
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        let targets = samples
            .labels()
            .iter()
            .map(|label| classes.partition_point(|c| c < label))
            .collect::<Vec<_>>();
        log::debug!(
            "fitting {} trees on {} samples x {} features, {} classes",
            params.trees,
            samples.len(),
            features,
            classes.len()
        );
        let trees = (0..params.trees.max(1))
            .into_par_iter()
            .map(|i| {
                Tree::grow(
                    samples.rows(),
                    &targets,
                    classes.len(),
                    params.max_depth,
                    params.seed.wrapping_add(i as u64),
                )
            })
            .collect::<Vec<_>>();
        Ok(Self::new(features, classes, trees))
    }

    pub(super) fn new(features: usize, classes: Vec<String>, trees: Vec<Tree>) -> Self {
        Self {
            features,
            classes,
            trees,
        }
    }

    /// Feature count every input row must have.
    pub fn features(&self) -> usize {
        self.features
    }
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    /// Probability of each class in [`Self::classes`] order.
    pub fn predict_proba(&self, row: &[Feature]) -> Result<Vec<Probability>, ForestError> {
        if row.len() != self.features {
            return Err(ForestError::Dimension {
                expected: self.features,
                actual: row.len(),
            });
        }
        let n = self.trees.len().max(1) as Probability;
        Ok(self
            .trees
            .iter()
            .map(|tree| tree.proba(row))
            .fold(vec![0.0; self.classes.len()], |mut sum, p| {
                sum.iter_mut().zip(p).for_each(|(s, p)| *s += p);
                sum
            })
            .into_iter()
            .map(|s| s / n)
            .collect())
    }

    /// Most probable class and its probability. Ties go to the earlier class.
    pub fn best(&self, row: &[Feature]) -> Result<(&str, Probability), ForestError> {
        let proba = self.predict_proba(row)?;
        let (i, p) = proba
            .iter()
            .enumerate()
            .fold((0, Probability::MIN), |(bi, bp), (i, &p)| {
                if p > bp { (i, p) } else { (bi, bp) }
            });
        Ok((self.classes[i].as_str(), p))
    }

    pub fn predict(&self, row: &[Feature]) -> Result<&str, ForestError> {
        self.best(row).map(|(label, _)| label)
    }
}
