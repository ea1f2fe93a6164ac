use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::llm::parser::parse_record_response;
use crate::llm::prompts::{EnhanceRequest, SYSTEM_PROMPT};
use crate::llm::provider::LlmProvider;
use crate::models::ResumeRecord;

pub struct OpenRouterProvider {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl OpenRouterProvider {
    pub fn new(api_key: String, api_base: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            api_base,
            model,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenRouterProvider {
    async fn enhance_resume(&self, request: EnhanceRequest) -> Result<ResumeRecord> {
        let prompt = request.to_prompt()?;
        tracing::debug!("Sending ~{} tokens to {}", request.estimate_tokens(), self.model);

        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            temperature: 0.7,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::LlmApi(format!("Failed to send request: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::LlmApi(format!(
                "OpenRouter API error ({status}): {body}"
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::LlmApi(format!("Failed to parse OpenRouter response: {e}")))?;

        if let Some(error) = result.error {
            return Err(Error::LlmApi(error.message));
        }

        let text = result
            .choices
            .into_iter()
            .filter_map(|choice| choice.message.content)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(Error::LlmApi("Empty response from OpenRouter".to_string()));
        }

        parse_record_response(&text)
    }

    fn name(&self) -> &str {
        "OpenRouter"
    }
}
