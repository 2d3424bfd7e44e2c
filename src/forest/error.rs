/// Errors raised while fitting, querying, or persisting a [`Forest`](super::Forest).
#[derive(Debug)]
pub enum ForestError {
    Empty,
    Ragged { row: usize, expected: usize, actual: usize },
    Dimension { expected: usize, actual: usize },
    NonFinite { row: usize, feature: usize },
    Corrupt(String),
    Io(std::io::Error),
}

impl std::fmt::Display for ForestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot fit a forest without samples"),
            Self::Ragged { row, expected, actual } => {
                write!(f, "row {} has {} features, expected {}", row, actual, expected)
            }
            Self::Dimension { expected, actual } => {
                write!(f, "expected {} features, got {}", expected, actual)
            }
            Self::NonFinite { row, feature } => {
                write!(f, "row {} feature {} is not finite", row, feature)
            }
            Self::Corrupt(reason) => write!(f, "corrupt forest artifact: {}", reason),
            Self::Io(e) => write!(f, "forest artifact i/o: {}", e),
        }
    }
}

impl std::error::Error for ForestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ForestError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::Corrupt("truncated".to_string()),
            _ => Self::Io(e),
        }
    }
}
