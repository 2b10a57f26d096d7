//! Generative model client
//!
//! The planner talks to the model through the [`ModelClient`] trait: a prompt
//! template plus named variables go in, raw text comes out. [`OllamaClient`]
//! is the HTTP implementation backed by a local Ollama server.
//!
//! ## Setup
//! - `OLLAMA_BASE_URL`: server address (default `http://localhost:11434`)
//! - `OLLAMA_MODEL`: model tag (default `llama3:8b`)
//! - `LLM_TEMPERATURE`, `LLM_TIMEOUT_SECS`: sampling temperature and request timeout

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ModelConfig;

pub type PromptVariables = HashMap<&'static str, String>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Model request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid model response: {0}")]
    InvalidResponse(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("No model configured")]
    Unavailable,
}

#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, template: &str, variables: &PromptVariables) -> Result<String, ModelError>;

    fn model_name(&self) -> String;
}

/// Fills `{name}` placeholders from `variables`. `{{` and `}}` produce literal braces.
pub fn render_prompt(template: &str, variables: &PromptVariables) -> Result<String, ModelError> {
    let mut rendered = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                rendered.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                rendered.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => name.push(ch),
                        None => {
                            return Err(ModelError::Prompt(format!(
                                "unclosed placeholder '{{{}'",
                                name
                            )))
                        }
                    }
                }
                let value = variables
                    .get(name.trim())
                    .ok_or_else(|| ModelError::Prompt(format!("missing variable '{}'", name)))?;
                rendered.push_str(value);
            }
            '}' => return Err(ModelError::Prompt("unmatched '}'".to_string())),
            other => rendered.push(other),
        }
    }

    Ok(rendered)
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Clone)]
pub struct OllamaClient {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
}

impl OllamaClient {
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn generate(&self, template: &str, variables: &PromptVariables) -> Result<String, ModelError> {
        let prompt = render_prompt(template, variables)?;
        debug!("Sending {} character prompt to {}", prompt.len(), self.model);

        let request = GenerateRequest {
            model: &self.model,
            prompt: &prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
            },
        };

        let response = self
            .http_client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        Ok(body.response)
    }

    fn model_name(&self) -> String {
        self.model.clone()
    }
}
