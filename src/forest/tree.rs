use super::Node;
use crate::Feature;
use crate::Probability;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// One CART classification tree stored as a flat node table.
/// Node 0 is the root; children always sit at higher indices than their parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Grows a tree on a bootstrap resample of `rows`.
    /// `targets[i]` is the class index of `rows[i]`, below `classes`.
    pub fn grow(
        rows: &[Vec<Feature>],
        targets: &[usize],
        classes: usize,
        max_depth: Option<usize>,
        seed: u64,
    ) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let n = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let bootstrap = (0..n).map(|_| rng.random_range(0..n)).collect::<Vec<_>>();
        let mut grower = Grower {
            rows,
            targets,
            classes,
            max_depth,
            tries: ((width as f64).sqrt() as usize).max(1),
            rng,
            nodes: Vec::new(),
        };
        grower.grow(bootstrap, 0);
        Self {
            nodes: grower.nodes,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Leaf distribution reached by `row`. The caller guarantees the row is
    /// at least as wide as every split feature in the tree.
    pub fn proba(&self, row: &[Feature]) -> &[Probability] {
        let mut i = 0;
        loop {
            match &self.nodes[i] {
                Node::Leaf(distribution) => return distribution,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    i = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    }
                }
            }
        }
    }

    /// Depth of the deepest leaf; a lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(0, 0)];
        while let Some((i, d)) = stack.pop() {
            deepest = deepest.max(d);
            if let Some(Node::Split { left, right, .. }) = self.nodes.get(i) {
                stack.push((*left, d + 1));
                stack.push((*right, d + 1));
            }
        }
        deepest
    }
}

impl From<Vec<Node>> for Tree {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

/// Gini impurity of a class histogram over `n` rows.
fn gini(counts: &[usize], n: usize) -> f32 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f32;
    1.0 - counts
        .iter()
        .map(|&c| c as f32 / n)
        .map(|p| p * p)
        .sum::<f32>()
}

/// Candidate split and the weighted impurity of its two children.
struct Cut {
    feature: usize,
    threshold: Feature,
    impurity: f32,
}

/// Recursive node builder for a single tree.
struct Grower<'a> {
    rows: &'a [Vec<Feature>],
    targets: &'a [usize],
    classes: usize,
    max_depth: Option<usize>,
    tries: usize,
    rng: SmallRng,
    nodes: Vec<Node>,
}

impl Grower<'_> {
    /// Appends the subtree for `indices` and returns its root index.
    fn grow(&mut self, indices: Vec<usize>, depth: usize) -> usize {
        let counts = self.counts(&indices);
        let index = self.nodes.len();
        self.nodes.push(Node::leaf(&counts));
        if self.terminal(&counts, depth) {
            return index;
        }
        if let Some(cut) = self.cut(&indices, &counts) {
            let rows = self.rows;
            let (l, r) = indices
                .into_iter()
                .partition::<Vec<_>, _>(|&i| rows[i][cut.feature] <= cut.threshold);
            if l.is_empty() || r.is_empty() {
                return index;
            }
            let left = self.grow(l, depth + 1);
            let right = self.grow(r, depth + 1);
            self.nodes[index] = Node::Split {
                feature: cut.feature,
                threshold: cut.threshold,
                left,
                right,
            };
        }
        index
    }

    fn counts(&self, indices: &[usize]) -> Vec<usize> {
        indices.iter().fold(vec![0; self.classes], |mut counts, &i| {
            counts[self.targets[i]] += 1;
            counts
        })
    }

    fn terminal(&self, counts: &[usize], depth: usize) -> bool {
        counts.iter().sum::<usize>() < 2
            || counts.iter().filter(|&&c| c > 0).count() < 2
            || self.max_depth.is_some_and(|d| depth >= d)
    }

    /// Best split over a random subset of features. Features that are constant
    /// within the node do not count toward the subset, so a split is found
    /// whenever any feature varies. Returns `None` unless impurity drops.
    fn cut(&mut self, indices: &[usize], counts: &[usize]) -> Option<Cut> {
        let parent = gini(counts, indices.len());
        let mut features = (0..self.rows[indices[0]].len()).collect::<Vec<_>>();
        features.shuffle(&mut self.rng);
        features
            .into_iter()
            .filter_map(|feature| self.sweep(indices, counts, feature))
            .take(self.tries)
            .min_by(|a, b| a.impurity.total_cmp(&b.impurity))
            .filter(|cut| cut.impurity < parent - f32::EPSILON)
    }

    /// Scans every boundary between distinct sorted values of one feature.
    fn sweep(&self, indices: &[usize], counts: &[usize], feature: usize) -> Option<Cut> {
        let mut sorted = indices
            .iter()
            .map(|&i| (self.rows[i][feature], self.targets[i]))
            .collect::<Vec<_>>();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
        let n = sorted.len();
        let mut left = vec![0; self.classes];
        let mut right = counts.to_vec();
        let mut best = None::<Cut>;
        for k in 1..n {
            let (x, y) = sorted[k - 1];
            let next = sorted[k].0;
            left[y] += 1;
            right[y] -= 1;
            if next <= x {
                continue;
            }
            let impurity = (k as f32 * gini(&left, k) + (n - k) as f32 * gini(&right, n - k))
                / n as f32;
            if best.as_ref().is_none_or(|b| impurity < b.impurity) {
                let mid = x + (next - x) / 2.0;
                best = Some(Cut {
                    feature,
                    threshold: if mid < next { mid } else { x },
                    impurity,
                });
            }
        }
        best
    }
}
