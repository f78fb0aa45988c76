//! Completion provider trait and implementations.

pub mod http;
pub mod openai;

use async_trait::async_trait;

use crate::error::Result;

/// A single completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
}

/// The provider's reply.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub text: String,
}

/// Seam for the one outbound LLM call, so the advisor flow can be tested
/// with injected fakes.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Issue one blocking completion call.
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;
}
