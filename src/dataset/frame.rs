use super::DatasetError;
use super::FRAME_COLUMN;
use super::LABEL_COLUMN;
use super::table::Table;
use crate::Feature;
use std::path::Path;

/// One landmark snapshot of a recorded motion gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub label: String,
    pub index: i64,
    pub features: Vec<Feature>,
}

impl Frame {
    /// Reads a motion CSV: `label`, `frame`, and feature columns, in any order.
    pub fn read(path: &Path) -> Result<Vec<Self>, DatasetError> {
        let mut table = Table::open(path)?;
        let label = table.column(LABEL_COLUMN)?;
        let frame = table.column(FRAME_COLUMN)?;
        let features = table.features(&[label, frame]);
        let frames = table
            .records()?
            .iter()
            .enumerate()
            .map(|(i, record)| {
                Ok(Self {
                    label: record.get(label).unwrap_or_default().to_string(),
                    index: Self::index(&table, i + 1, frame, record)?,
                    features: table.numbers(i + 1, &features, record)?,
                })
            })
            .collect::<Result<Vec<_>, DatasetError>>()?;
        if frames.is_empty() {
            Err(DatasetError::Empty)
        } else {
            Ok(frames)
        }
    }

    /// Frame indices are integers, though exporters sometimes write `12.0`.
    fn index(
        table: &Table,
        row: usize,
        column: usize,
        record: &csv::StringRecord,
    ) -> Result<i64, DatasetError> {
        let value = record.get(column).unwrap_or_default();
        value
            .parse::<i64>()
            .ok()
            .or_else(|| {
                value
                    .parse::<f64>()
                    .ok()
                    .filter(|x| x.fract() == 0.0)
                    .map(|x| x as i64)
            })
            .ok_or_else(|| DatasetError::Cell {
                row,
                column: table.header(column).to_string(),
                value: value.to_string(),
            })
    }
}
