use serde::Deserialize;
use serde::Serialize;

/// Body of `POST /predict`. Every field may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    #[serde(default)]
    pub landmarks: Option<Vec<f64>>,
    #[serde(default)]
    pub hand_count: i64,
    #[serde(default)]
    pub is_motion: bool,
}
