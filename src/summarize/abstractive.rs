//! Abstractive summarization via a hosted chat model.
//!
//! The model client is a process-wide lazily-initialized singleton: the first
//! abstractive request pays the setup cost, later requests reuse the handle.
//! Inputs beyond the context budget are explicitly truncated with a logged
//! warning rather than silently cut by the backend.

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{info, warn};

use crate::core::config::AppConfig;
use crate::errors::SummarizeError;
use crate::summarize::{Summarizer, SummaryParams};

const API_URL: &str = "https://api.openai.com/v1/chat/completions";
const MAX_CONTEXT_TOKENS: usize = 16_000;
const TOKEN_BUFFER: usize = 250;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

static MODEL: OnceCell<LlmSummarizer> = OnceCell::new();

/// The process-wide model handle, built on first use.
///
/// Fails with `ModelUnavailable` when no API key is configured.
pub fn model(config: &AppConfig) -> Result<&'static LlmSummarizer, SummarizeError> {
    MODEL.get_or_try_init(|| {
        let api_key = config.openai_api_key.clone().ok_or_else(|| {
            SummarizeError::ModelUnavailable("OPENAI_API_KEY is not set".to_string())
        })?;
        Ok(LlmSummarizer::new(api_key, config.model_name()))
    })
}

pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Chat-model client for generating summaries.
pub struct LlmSummarizer {
    api_key: String,
    model_name: String,
}

impl LlmSummarizer {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
        }
    }

    pub fn build_prompt(
        &self,
        text: &str,
        min_tokens: usize,
        max_tokens: usize,
    ) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(format!(
                    "You summarize articles. Write one cohesive summary of the user's text, \
                     roughly {min_tokens} to {max_tokens} tokens long. \
                     Provide only the summary, nothing else."
                )),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(text.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }

    /// Cut `text` to the context budget left after the reply and a safety
    /// buffer. Returns the text unchanged when it already fits.
    pub fn truncate_to_budget(text: &str, max_tokens: usize) -> String {
        let budget_tokens = MAX_CONTEXT_TOKENS
            .saturating_sub(max_tokens)
            .saturating_sub(TOKEN_BUFFER);

        if estimate_tokens(text) <= budget_tokens {
            return text.to_string();
        }

        warn!(
            "Input of ~{} tokens exceeds the {} token budget, truncating",
            estimate_tokens(text),
            budget_tokens
        );
        text.chars().take(budget_tokens * 4).collect()
    }

    pub async fn generate(
        &self,
        text: &str,
        min_tokens: usize,
        max_tokens: usize,
    ) -> Result<String, SummarizeError> {
        let input = Self::truncate_to_budget(text, max_tokens);
        let prompt = self.build_prompt(&input, min_tokens, max_tokens);

        #[cfg(feature = "debug-logs")]
        info!("Using model prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Generating abstractive summary of ~{} input tokens",
            estimate_tokens(&input)
        );

        let messages: Vec<Value> = prompt
            .iter()
            .map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::user => "user",
                    MessageRole::assistant => "assistant",
                    MessageRole::function => "function",
                    MessageRole::tool => "tool",
                };
                let content_val = match &msg.content {
                    Content::Text(text) => json!(text),
                    _ => json!(""),
                };
                json!({
                    "role": role_str,
                    "content": content_val
                })
            })
            .collect();

        let request_body = json!({
            "model": self.model_name,
            "messages": messages,
            "max_tokens": max_tokens
        });

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        let response = client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizeError::Api(format!("model request failed: {e}")))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummarizeError::Api(error_text));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| SummarizeError::Api(format!("failed to parse model response: {e}")))?;

        extract_output_text(&completion).ok_or(SummarizeError::EmptyModelOutput)
    }
}

#[async_trait]
impl Summarizer for LlmSummarizer {
    async fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<String, SummarizeError> {
        self.generate(text, params.min_tokens, params.max_tokens).await
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn extract_output_text(completion: &ChatCompletionResponse) -> Option<String> {
    completion
        .choices
        .first()
        .and_then(|choice| choice.message.content.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_passes_through_untouched() {
        let text = "A short article body.";
        assert_eq!(LlmSummarizer::truncate_to_budget(text, 150), text);
    }

    #[test]
    fn oversized_input_is_cut_to_the_budget() {
        let text = "word ".repeat(40_000);
        let cut = LlmSummarizer::truncate_to_budget(&text, 150);
        assert!(cut.len() < text.len());
        assert!(estimate_tokens(&cut) <= MAX_CONTEXT_TOKENS);
    }

    #[test]
    fn prompt_carries_length_bounds_and_text() {
        let client = LlmSummarizer::new("key".to_string(), "test-model".to_string());
        let prompt = client.build_prompt("Body text.", 30, 150);
        assert_eq!(prompt.len(), 2);
        match &prompt[0].content {
            Content::Text(system) => {
                assert!(system.contains("30"));
                assert!(system.contains("150"));
            }
            _ => panic!("system message should be text"),
        }
        match &prompt[1].content {
            Content::Text(user) => assert_eq!(user, "Body text."),
            _ => panic!("user message should be text"),
        }
    }

    #[test]
    fn completion_text_is_extracted_and_trimmed() {
        let completion = ChatCompletionResponse {
            choices: vec![Choice {
                message: ChoiceMessage {
                    content: Some("  A summary.  ".to_string()),
                },
            }],
        };
        assert_eq!(extract_output_text(&completion).as_deref(), Some("A summary."));

        let empty = ChatCompletionResponse { choices: vec![] };
        assert_eq!(extract_output_text(&empty), None);
    }
}
