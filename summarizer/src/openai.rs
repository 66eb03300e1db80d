use crate::prompt::build_prompt;
use crate::{Summarizer, SummarizerError};
use async_trait::async_trait;
use model::report::RepositoryReport;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OpenAiConfig {
    pub enabled: bool,
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: String::new(),
            api_url: "https://api.openai.com/v1".to_owned(),
            model: "gpt-4o-mini".to_owned(),
            max_tokens: 500,
            temperature: 0.5,
            timeout_seconds: 60,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// OpenAI 兼容的 chat completion 客户端
pub struct OpenAiSummarizer {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiSummarizer {
    pub fn new(config: OpenAiConfig) -> Result<Self, SummarizerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client, config })
    }

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.config.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(
        &self,
        report: &RepositoryReport,
        context: Option<&str>,
    ) -> Result<String, SummarizerError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user".to_owned(),
                content: Some(build_prompt(report, context)),
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };
        debug!(model = %self.config.model, repository = %report.repository, "requesting summary");

        let response = self
            .client
            .post(self.chat_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or(text);
            return Err(match status {
                StatusCode::UNAUTHORIZED => SummarizerError::Authentication(message),
                StatusCode::TOO_MANY_REQUESTS => SummarizerError::RateLimited(message),
                _ => SummarizerError::Api {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(e.to_string()))?;
        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| SummarizerError::InvalidResponse("no choices returned".to_owned()))?;

        // 模型未返回内容时摘要为空字符串
        Ok(choice.message.and_then(|m| m.content).unwrap_or_default())
    }
}
