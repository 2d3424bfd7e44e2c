use super::Confusion;

/// Precision, recall, F1, and support for one class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub precision: f32,
    pub recall: f32,
    pub f1: f32,
    pub support: usize,
}

/// Per-class scores with macro and support-weighted averages.
/// Undefined ratios (nothing predicted, nothing actual) count as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    classes: Vec<String>,
    scores: Vec<Scores>,
    accuracy: f32,
    total: usize,
}

impl Report {
    pub fn new(confusion: &Confusion) -> Self {
        let ratio = |a: usize, b: usize| if b == 0 { 0.0 } else { a as f32 / b as f32 };
        let scores = (0..confusion.classes().len())
            .map(|i| {
                let precision = ratio(confusion.hits(i), confusion.predicted(i));
                let recall = ratio(confusion.hits(i), confusion.support(i));
                let f1 = if precision + recall == 0.0 {
                    0.0
                } else {
                    2.0 * precision * recall / (precision + recall)
                };
                Scores {
                    precision,
                    recall,
                    f1,
                    support: confusion.support(i),
                }
            })
            .collect::<Vec<_>>();
        let total = confusion.total();
        let hits = (0..scores.len()).map(|i| confusion.hits(i)).sum();
        Self {
            classes: confusion.classes().to_vec(),
            scores,
            accuracy: ratio(hits, total),
            total,
        }
    }

    pub fn scores(&self) -> &[Scores] {
        &self.scores
    }
    pub fn accuracy(&self) -> f32 {
        self.accuracy
    }

    /// Unweighted mean over classes.
    pub fn macro_avg(&self) -> Scores {
        let n = self.scores.len().max(1) as f32;
        self.average(|_| 1.0 / n)
    }

    /// Mean over classes weighted by support.
    pub fn weighted_avg(&self) -> Scores {
        let n = self.total.max(1) as f32;
        self.average(|s| s.support as f32 / n)
    }

    fn average<F: Fn(&Scores) -> f32>(&self, weight: F) -> Scores {
        self.scores.iter().fold(
            Scores {
                precision: 0.0,
                recall: 0.0,
                f1: 0.0,
                support: self.total,
            },
            |acc, s| Scores {
                precision: acc.precision + weight(s) * s.precision,
                recall: acc.recall + weight(s) * s.recall,
                f1: acc.f1 + weight(s) * s.f1,
                support: acc.support,
            },
        )
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let w = self
            .classes
            .iter()
            .map(String::len)
            .chain(std::iter::once("weighted avg".len()))
            .max()
            .unwrap_or(12);
        let line = |f: &mut std::fmt::Formatter<'_>, name: &str, s: &Scores| {
            writeln!(
                f,
                "{:>w$} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                name, s.precision, s.recall, s.f1, s.support
            )
        };
        writeln!(
            f,
            "{:>w$} {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for (class, s) in self.classes.iter().zip(&self.scores) {
            line(f, class, s)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>w$} {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, self.total
        )?;
        line(f, "macro avg", &self.macro_avg())?;
        line(f, "weighted avg", &self.weighted_avg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        let classes = vec!["a".to_string(), "b".to_string()];
        let truth = ["a", "a", "a", "b"];
        let predicted = ["a", "a", "b", "b"];
        Report::new(&Confusion::new(&classes, &truth, &predicted))
    }

    #[test]
    fn per_class_scores() {
        let report = report();
        let a = report.scores()[0];
        let b = report.scores()[1];
        assert_eq!(a.precision, 1.0);
        assert!((a.recall - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(a.support, 3);
        assert_eq!(b.precision, 0.5);
        assert_eq!(b.recall, 1.0);
        assert_eq!(report.accuracy(), 0.75);
    }

    #[test]
    fn averages() {
        let report = report();
        assert!((report.macro_avg().precision - 0.75).abs() < 1e-6);
        assert!((report.weighted_avg().recall - 0.75).abs() < 1e-6);
    }

    #[test]
    fn unpredicted_class_scores_zero() {
        let classes = vec!["a".to_string(), "b".to_string()];
        let report = Report::new(&Confusion::new(&classes, &["a", "b"], &["a", "a"]));
        assert_eq!(report.scores()[1].precision, 0.0);
        assert_eq!(report.scores()[1].f1, 0.0);
    }

    #[test]
    fn renders_table() {
        let text = report().to_string();
        assert!(text.contains("precision"));
        assert!(text.contains("macro avg"));
        assert!(text.contains("weighted avg"));
        assert_eq!(text.lines().count(), 1 + 1 + 2 + 1 + 3);
    }
}
