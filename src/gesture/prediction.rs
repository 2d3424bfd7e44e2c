use crate::Probability;

/// Outcome of scoring one request.
/// The null prediction carries no label and zero confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: Option<String>,
    pub confidence: Probability,
}

impl Prediction {
    pub fn null() -> Self {
        Self {
            label: None,
            confidence: 0.0,
        }
    }
    pub fn new(label: &str, confidence: Probability) -> Self {
        Self {
            label: Some(label.to_string()),
            confidence,
        }
    }
    pub fn is_null(&self) -> bool {
        self.label.is_none()
    }
}

/// Reasons a request's landmarks could not be scored.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    Shape { expected: usize, actual: usize },
    NonFinite { index: usize },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shape { expected, actual } => {
                write!(f, "expected {} landmark values, got {}", expected, actual)
            }
            Self::NonFinite { index } => write!(f, "landmark value {} is not finite", index),
        }
    }
}

impl std::error::Error for Rejection {}
