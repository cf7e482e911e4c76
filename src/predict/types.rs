use serde::{Deserialize, Serialize};

/// Whatever the client sends under `symptoms` is forwarded verbatim; the
/// external program owns validation. An absent field becomes JSON null.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub symptoms: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub disease: String,
}
