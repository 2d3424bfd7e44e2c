use super::Samples;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;

/// A deterministic train/test partition of [`Samples`].
#[derive(Debug, Clone)]
pub struct Split {
    pub train: Samples,
    pub test: Samples,
}

impl Split {
    /// Holds out `fraction` of the samples. The training side gets
    /// `round((1 - fraction) * n)` rows. With `stratify`, every label
    /// contributes to the test side in proportion to its frequency.
    pub fn new(samples: &Samples, fraction: f64, seed: u64, stratify: bool) -> Self {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let n = samples.len();
        let train = (((1.0 - fraction) * n as f64).round() as usize).min(n);
        let holdout = n - train;
        let (mut train, mut test) = if stratify {
            Self::stratified(samples, holdout, rng)
        } else {
            Self::shuffled(n, holdout, rng)
        };
        train.shuffle(rng);
        test.shuffle(rng);
        Self {
            train: samples.select(&train),
            test: samples.select(&test),
        }
    }

    fn shuffled(n: usize, holdout: usize, rng: &mut SmallRng) -> (Vec<usize>, Vec<usize>) {
        let mut indices = (0..n).collect::<Vec<_>>();
        indices.shuffle(rng);
        let train = indices.split_off(holdout);
        (train, indices)
    }

    fn stratified(samples: &Samples, holdout: usize, rng: &mut SmallRng) -> (Vec<usize>, Vec<usize>) {
        let groups = samples
            .labels()
            .iter()
            .enumerate()
            .fold(BTreeMap::<&str, Vec<usize>>::new(), |mut groups, (i, label)| {
                groups.entry(label.as_str()).or_default().push(i);
                groups
            });
        let sizes = groups.values().map(Vec::len).collect::<Vec<_>>();
        let quotas = Self::quotas(&sizes, holdout);
        let mut train = Vec::with_capacity(samples.len() - holdout);
        let mut test = Vec::with_capacity(holdout);
        for (mut group, quota) in groups.into_values().zip(quotas) {
            group.shuffle(rng);
            test.extend_from_slice(&group[..quota]);
            train.extend_from_slice(&group[quota..]);
        }
        (train, test)
    }

    /// Apportions `holdout` test slots across groups of the given sizes.
    /// Each group gets the floor of its proportional share; leftover slots go
    /// to the largest fractional remainders, earlier groups first on ties.
    pub fn quotas(sizes: &[usize], holdout: usize) -> Vec<usize> {
        let n = sizes.iter().sum::<usize>();
        if n == 0 {
            return vec![0; sizes.len()];
        }
        let mut quotas = sizes
            .iter()
            .map(|&size| size * holdout / n)
            .collect::<Vec<_>>();
        let mut remainders = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| (i, size * holdout % n))
            .collect::<Vec<_>>();
        remainders.sort_by(|(i, a), (j, b)| b.cmp(a).then(i.cmp(j)));
        let mut left = holdout.saturating_sub(quotas.iter().sum::<usize>());
        for (i, _) in remainders {
            if left == 0 {
                break;
            }
            if quotas[i] < sizes[i] {
                quotas[i] += 1;
                left -= 1;
            }
        }
        quotas
    }
}
