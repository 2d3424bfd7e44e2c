use super::DatasetError;
use super::LABEL_COLUMN;
use super::table::Table;
use crate::Feature;
use std::collections::BTreeMap;
use std::path::Path;

/// Labeled feature rows. Every row has the same width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Samples {
    labels: Vec<String>,
    rows: Vec<Vec<Feature>>,
}

impl Samples {
    /// Reads a static-pose CSV: one `label` column, every other column a feature.
    pub fn read(path: &Path) -> Result<Self, DatasetError> {
        let mut table = Table::open(path)?;
        let label = table.column(LABEL_COLUMN)?;
        let features = table.features(&[label]);
        let mut samples = Self::default();
        for (i, record) in table.records()?.iter().enumerate() {
            let row = table.numbers(i + 1, &features, record)?;
            let name = record.get(label).unwrap_or_default().to_string();
            samples.push(name, row);
        }
        if samples.is_empty() {
            Err(DatasetError::Empty)
        } else {
            Ok(samples)
        }
    }

    pub fn push(&mut self, label: String, row: Vec<Feature>) {
        self.labels.push(label);
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// Feature count of the first row, zero when empty.
    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
    pub fn rows(&self) -> &[Vec<Feature>] {
        &self.rows
    }

    /// Sample count per label, in label order.
    pub fn distribution(&self) -> BTreeMap<&str, usize> {
        self.labels
            .iter()
            .fold(BTreeMap::new(), |mut counts, label| {
                *counts.entry(label.as_str()).or_insert(0) += 1;
                counts
            })
    }

    /// Copies the samples at `indices`, in that order.
    pub fn select(&self, indices: &[usize]) -> Self {
        indices.iter().fold(Self::default(), |mut picked, &i| {
            picked.push(self.labels[i].clone(), self.rows[i].clone());
            picked
        })
    }
}

impl FromIterator<(String, Vec<Feature>)> for Samples {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Feature>)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |mut samples, (label, row)| {
                samples.push(label, row);
                samples
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn scratch(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("handsign-{}-{}.csv", std::process::id(), name));
        let mut file = std::fs::File::create(&path).expect("create scratch csv");
        file.write_all(contents.as_bytes()).expect("write scratch csv");
        path
    }

    #[test]
    fn reads_label_anywhere() {
        let path = scratch("label-middle", "p0,label,p1\n0.1,A,0.2\n0.3,B,0.4\n");
        let samples = Samples::read(&path).expect("read");
        assert_eq!(samples.labels(), &["A".to_string(), "B".to_string()]);
        assert_eq!(samples.rows(), &[vec![0.1, 0.2], vec![0.3, 0.4]]);
        assert_eq!(samples.width(), 2);
    }

    #[test]
    fn non_finite_cells_are_rejected() {
        for (name, cell) in [("nan", "NaN"), ("inf", "inf"), ("neg-inf", "-inf")] {
            let path = scratch(name, &format!("label,p0\nA,0.5\nB,{}\n", cell));
            match Samples::read(&path) {
                Err(DatasetError::Cell { row, column, value }) => {
                    assert_eq!(row, 2);
                    assert_eq!(column, "p0");
                    assert_eq!(value, cell);
                }
                other => panic!("{} loaded as {:?}", cell, other),
            }
        }
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("handsign-definitely-absent.csv");
        assert!(matches!(Samples::read(&path), Err(DatasetError::Missing(_))));
    }

    #[test]
    fn missing_label_column() {
        let path = scratch("no-label", "p0,p1\n0.1,0.2\n");
        assert!(matches!(Samples::read(&path), Err(DatasetError::Column("label"))));
    }

    #[test]
    fn non_numeric_cell() {
        let path = scratch("bad-cell", "label,p0\nA,zero\n");
        match Samples::read(&path) {
            Err(DatasetError::Cell { row, column, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "p0");
            }
            other => panic!("expected bad cell, got {:?}", other),
        }
    }

    #[test]
    fn header_only() {
        let path = scratch("header-only", "label,p0\n");
        assert!(matches!(Samples::read(&path), Err(DatasetError::Empty)));
    }

    #[test]
    fn distribution_sorted_by_label() {
        let samples = [("b", 1.), ("a", 2.), ("b", 3.)]
            .into_iter()
            .map(|(l, x)| (l.to_string(), vec![x]))
            .collect::<Samples>();
        let counts = samples.distribution().into_iter().collect::<Vec<_>>();
        assert_eq!(counts, vec![("a", 1), ("b", 2)]);
    }
}
