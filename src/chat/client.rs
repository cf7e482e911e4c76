//! HTTP client for the generative-language endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::prompt;
use crate::config::ChatConfig;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request timeout - the API took too long to respond")]
    Timeout,

    #[error("connection error - unable to reach the API")]
    Connect,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed API response: {0}")]
    Malformed(String),
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
    #[serde(rename = "safetySettings")]
    pub safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
    pub stop_sequences: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

impl GenerateRequest {
    pub(crate) fn for_question(question: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt::build_prompt(question),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: 1024,
                stop_sequences: Vec::new(),
            },
            safety_settings: HARM_CATEGORIES
                .iter()
                .map(|category| SafetySetting {
                    category: category.to_string(),
                    threshold: "BLOCK_MEDIUM_AND_ABOVE".to_string(),
                })
                .collect(),
        }
    }
}

pub struct ChatClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(config: &ChatConfig) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// One upstream call, one reply. Classifies every way the call can go
    /// wrong; the route layer decides what the user sees.
    pub async fn generate(&self, question: &str) -> Result<String, ChatError> {
        let body = GenerateRequest::for_question(question);

        let response = self
            .http
            .post(format!("{}?key={}", self.api_url, self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|source| ChatError::Malformed(source.to_string()))?;

        extract_reply(parsed)
    }
}

fn classify_transport_error(source: reqwest::Error) -> ChatError {
    if source.is_timeout() {
        ChatError::Timeout
    } else if source.is_connect() {
        ChatError::Connect
    } else {
        ChatError::Network(source.to_string())
    }
}

/// `candidates[0].content.parts[0].text`, or a malformed-payload error when
/// any link in that chain is missing or blank.
pub(crate) fn extract_reply(response: GenerateResponse) -> Result<String, ChatError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| ChatError::Malformed("no generated text in response".to_string()))
}
