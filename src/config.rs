//! Environment-driven configuration with fixed fallbacks.

use std::env;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_PREDICTOR_PROGRAM: &str = "python";
pub const DEFAULT_PREDICTOR_SCRIPT: &str = "predict.py";
pub const DEFAULT_GENERATIVE_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub predictor: PredictorConfig,
    pub chat: ChatConfig,
    pub firestore: Option<FirestoreConfig>,
}

#[derive(Debug, Clone)]
pub struct PredictorConfig {
    pub program: String,
    pub script: String,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub project: String,
    pub api_key: String,
}

impl Config {
    /// Reads every knob from the environment. Missing optional values fall
    /// back to defaults; missing credentials degrade the matching feature
    /// instead of refusing to start.
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "PORT is not a valid port number, using the default");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let predictor = PredictorConfig {
            program: env::var("PREDICTOR_PROGRAM")
                .unwrap_or_else(|_| DEFAULT_PREDICTOR_PROGRAM.to_string()),
            script: env::var("PREDICTOR_SCRIPT")
                .unwrap_or_else(|_| DEFAULT_PREDICTOR_SCRIPT.to_string()),
        };

        let chat = ChatConfig {
            api_url: env::var("GENERATIVE_API_URL")
                .unwrap_or_else(|_| DEFAULT_GENERATIVE_API_URL.to_string()),
            api_key: env::var("GENERATIVE_API_KEY").unwrap_or_else(|_| {
                warn!("GENERATIVE_API_KEY is not set; chat will answer with the fallback reply");
                String::new()
            }),
        };

        let firestore = match (env::var("FIRESTORE_PROJECT"), env::var("FIRESTORE_API_KEY")) {
            (Ok(project), Ok(api_key)) => Some(FirestoreConfig { project, api_key }),
            (Ok(_), Err(_)) => {
                warn!("FIRESTORE_PROJECT is set without FIRESTORE_API_KEY; using the in-memory profile store");
                None
            }
            _ => None,
        };

        Self {
            port,
            predictor,
            chat,
            firestore,
        }
    }
}
