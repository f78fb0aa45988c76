//! OpenAI text-completions provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{DeskhandError, Result};

use super::http::{bearer_headers, shared_client, status_to_error};
use super::{CompletionProvider, CompletionRequest, CompletionResponse};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

pub struct OpenAiCompletionProvider {
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiCompletionProvider {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "prompt": request.prompt,
            "max_tokens": request.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionProvider {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let body = self.build_request_body(request);
        let url = format!("{}/completions", self.base_url);

        debug!(model = %self.model, "OpenAI completion");

        let resp = shared_client()
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: OpenAiCompletionResponse = resp.json().await?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DeskhandError::api(200, "No choices in OpenAI response"))?;

        Ok(CompletionResponse {
            text: choice.text.trim().to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiCompletionResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    text: String,
}
