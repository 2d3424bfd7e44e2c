use crate::Probability;
use crate::gesture::Prediction;
use serde::Deserialize;
use serde::Serialize;

/// Body of every `/predict` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: Option<String>,
    pub confidence: Probability,
}

impl PredictResponse {
    /// `{"prediction": null, "confidence": 0.0}`
    pub fn null() -> Self {
        Self::from(Prediction::null())
    }
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            prediction: prediction.label,
            confidence: prediction.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_payload() {
        let json = serde_json::to_value(PredictResponse::null()).expect("serialize");
        assert_eq!(json, serde_json::json!({ "prediction": null, "confidence": 0.0 }));
    }

    #[test]
    fn labeled_payload() {
        let json = serde_json::to_value(PredictResponse::from(Prediction::new("A", 0.75)))
            .expect("serialize");
        assert_eq!(json, serde_json::json!({ "prediction": "A", "confidence": 0.75 }));
    }
}
