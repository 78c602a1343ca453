// ABOUTME: Google Gemini LLM provider implementation for text and vision requests
// ABOUTME: Talks to the Generative Language API generateContent endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! # Gemini Provider
//!
//! Implementation of the [`LlmProvider`] trait for Google's Gemini
//! models, covering both plain text generation and inline-image vision
//! requests.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with an API key from
//! Google AI Studio: <https://makersuite.google.com/app/apikey>
//!
//! ## Supported Models
//!
//! - `gemini-1.5-flash` (default): balanced performance and cost, vision-capable
//! - `gemini-1.5-pro`: advanced reasoning capabilities
//! - `gemini-2.0-flash-exp`: experimental fast model

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::{ChatMessage, ChatRequest, ChatResponse, ImageData, LlmProvider, MessageRole, TokenUsage};
use crate::errors::{AppError, ErrorCode};

/// Environment variable for Gemini API key
const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default model to use
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ContentPart>,
}

/// Part of content: text or inline image data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inline_data")]
        inline_data: InlineData,
    },
}

/// Inline binary payload (images) for vision requests
#[derive(Debug, Clone, Serialize, Deserialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

/// Generation configuration
#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    candidate_count: u32,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

/// Usage metadata from Gemini API response
#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    default_model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            default_model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Create a provider from the `GEMINI_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var(GEMINI_API_KEY_ENV).map_err(|_| {
            AppError::config(format!("{GEMINI_API_KEY_ENV} environment variable not set"))
        })?;
        Ok(Self::new(api_key))
    }

    /// Set a custom default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        format!(
            "{API_BASE_URL}/models/{model}:{method}?key={}",
            self.api_key
        )
    }

    /// Convert our message role to Gemini's role format
    ///
    /// System messages go through the separate `system_instruction`
    /// field; one appearing here maps to "user" for compatibility.
    const fn convert_role(role: MessageRole) -> &'static str {
        match role {
            MessageRole::System | MessageRole::User => "user",
            MessageRole::Assistant => "model",
        }
    }

    /// Convert chat messages to Gemini format
    fn convert_messages(messages: &[ChatMessage]) -> (Vec<GeminiContent>, Option<GeminiContent>) {
        let mut contents = Vec::new();
        let mut system_instruction = None;

        for message in messages {
            if message.role == MessageRole::System {
                system_instruction = Some(GeminiContent {
                    role: None,
                    parts: vec![ContentPart::Text {
                        text: message.content.clone(),
                    }],
                });
            } else {
                contents.push(GeminiContent {
                    role: Some(Self::convert_role(message.role).to_owned()),
                    parts: vec![ContentPart::Text {
                        text: message.content.clone(),
                    }],
                });
            }
        }

        (contents, system_instruction)
    }

    /// Build a Gemini API request from a `ChatRequest`
    fn build_gemini_request(request: &ChatRequest) -> GeminiRequest {
        let (contents, system_instruction) = Self::convert_messages(&request.messages);

        let generation_config = if request.temperature.is_some() || request.max_tokens.is_some() {
            Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
                candidate_count: 1,
            })
        } else {
            None
        };

        GeminiRequest {
            contents,
            system_instruction,
            generation_config,
        }
    }

    /// Build a vision request: one user turn with a text part and an image part
    fn build_vision_request(prompt: &str, image: &ImageData) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_owned()),
                parts: vec![
                    ContentPart::Text {
                        text: prompt.to_owned(),
                    },
                    ContentPart::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type.clone(),
                            data: image.data_base64.clone(),
                        },
                    },
                ],
            }],
            system_instruction: None,
            generation_config: None,
        }
    }

    /// POST a request and convert the reply into our response type
    async fn send_request(
        &self,
        model: &str,
        gemini_request: &GeminiRequest,
    ) -> Result<ChatResponse, AppError> {
        let url = self.build_url(model, "generateContent");

        let response = self
            .client
            .post(&url)
            .json(gemini_request)
            .send()
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    "AI service is unreachable",
                )
                .with_source(e)
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::internal("Failed to read AI response").with_source(e))?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response");
                AppError::internal("Failed to parse AI response").with_source(e)
            })?;

        if let Some(error) = gemini_response.error {
            return Err(AppError::internal(format!(
                "Gemini API error: {}",
                error.message
            )));
        }

        let content = Self::extract_content(&gemini_response)?;
        let usage = gemini_response
            .usage_metadata
            .as_ref()
            .map(Self::convert_usage);
        let finish_reason = gemini_response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.clone());

        debug!("Successfully received Gemini response");

        Ok(ChatResponse {
            content,
            model: model.to_owned(),
            usage,
            finish_reason,
        })
    }

    /// Extract text content from Gemini response
    fn extract_content(response: &GeminiResponse) -> Result<String, AppError> {
        let part = response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .ok_or_else(|| AppError::internal("No content in Gemini response"))?;

        match part {
            ContentPart::Text { text } => Ok(text.clone()),
            ContentPart::InlineData { .. } => Err(AppError::internal(
                "Unexpected binary content in model output",
            )),
        }
    }

    /// Convert usage metadata to our token usage format
    fn convert_usage(metadata: &UsageMetadata) -> TokenUsage {
        TokenUsage {
            prompt_tokens: metadata.prompt.unwrap_or(0),
            completion_tokens: metadata.candidates.unwrap_or(0),
            total_tokens: metadata.total.unwrap_or(0),
        }
    }

    /// Map API error status to appropriate error type
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                "AI service quota exceeded. Please wait a moment and try again.",
            ),
            500..=599 => AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                "AI service is temporarily unavailable",
            )
            .with_source(std::io::Error::other(message)),
            _ => AppError::internal(format!("Gemini API error ({status})"))
                .with_source(std::io::Error::other(message)),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let gemini_request = Self::build_gemini_request(request);

        debug!("Sending text request to Gemini API");
        self.send_request(model, &gemini_request).await
    }

    #[instrument(skip(self, prompt, image), fields(mime = %image.mime_type))]
    async fn complete_vision(
        &self,
        prompt: &str,
        image: &ImageData,
    ) -> Result<ChatResponse, AppError> {
        let gemini_request = Self::build_vision_request(prompt, image);

        debug!("Sending image to Gemini for recognition");
        self.send_request(&self.default_model, &gemini_request).await
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, AppError> {
        // Listing models verifies the API key without burning quota
        let url = format!("{API_BASE_URL}/models?key={}", self.api_key);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::internal("Health check failed").with_source(e))?;

        Ok(response.status().is_success())
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
