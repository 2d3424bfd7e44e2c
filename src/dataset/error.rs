use std::path::PathBuf;

/// Errors raised while reading a dataset from disk.
#[derive(Debug)]
pub enum DatasetError {
    Missing(PathBuf),
    Column(&'static str),
    Cell {
        row: usize,
        column: String,
        value: String,
    },
    Empty,
    Csv(csv::Error),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "{} not found", path.display()),
            Self::Column(name) => write!(f, "'{}' column missing", name),
            Self::Cell { row, column, value } => {
                write!(f, "row {} column '{}': not a finite number: {:?}", row, column, value)
            }
            Self::Empty => write!(f, "dataset has no samples"),
            Self::Csv(e) => write!(f, "malformed csv: {}", e),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for DatasetError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}
