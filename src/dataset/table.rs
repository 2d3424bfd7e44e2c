use super::DatasetError;
use crate::Feature;
use std::fs::File;
use std::path::Path;

/// A CSV file with its header row resolved.
pub(super) struct Table {
    headers: csv::StringRecord,
    reader: csv::Reader<File>,
}

impl Table {
    pub fn open(path: &Path) -> Result<Self, DatasetError> {
        if !path.is_file() {
            return Err(DatasetError::Missing(path.to_path_buf()));
        }
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;
        let headers = reader.headers()?.clone();
        log::info!("{:<32}{:<32}", "loading     dataset", path.display());
        Ok(Self { headers, reader })
    }

    /// Position of a required column.
    pub fn column(&self, name: &'static str) -> Result<usize, DatasetError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or(DatasetError::Column(name))
    }

    /// Positions of every column not in `except`, in file order.
    pub fn features(&self, except: &[usize]) -> Vec<usize> {
        (0..self.headers.len())
            .filter(|i| !except.contains(i))
            .collect()
    }

    pub fn header(&self, column: usize) -> &str {
        self.headers.get(column).unwrap_or_default()
    }

    /// Every data row, read eagerly so cells can be parsed against the header.
    pub fn records(&mut self) -> Result<Vec<csv::StringRecord>, DatasetError> {
        self.reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(DatasetError::from)
    }

    pub fn number(
        &self,
        row: usize,
        column: usize,
        record: &csv::StringRecord,
    ) -> Result<Feature, DatasetError> {
        let value = record.get(column).unwrap_or_default();
        value
            .parse::<Feature>()
            .ok()
            .filter(|x| x.is_finite())
            .ok_or_else(|| DatasetError::Cell {
                row,
                column: self.header(column).to_string(),
                value: value.to_string(),
            })
    }

    pub fn numbers(
        &self,
        row: usize,
        columns: &[usize],
        record: &csv::StringRecord,
    ) -> Result<Vec<Feature>, DatasetError> {
        columns
            .iter()
            .map(|&c| self.number(row, c, record))
            .collect()
    }
}
