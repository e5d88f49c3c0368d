use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use writeme_core::{LlmConfig, WritemeError};

/// A backend that turns a prompt into text.
///
/// Implementations report failure through `Err`; the pipeline turns any
/// error into [`WritemeError::GenerationUnavailable`].
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, WritemeError>;

    /// Model identifier, reported alongside the generated document.
    fn model(&self) -> &str;
}

/// A message in a chat conversation with the LLM.
///
/// # Examples
///
/// ```
/// use writeme_generate::llm::{ChatMessage, Role};
///
/// let msg = ChatMessage {
///     role: Role::User,
///     content: "Write a README".into(),
/// };
/// assert!(matches!(msg.role, Role::User));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Role of the message sender.
    pub role: Role,
    /// Text content of the message.
    pub content: String,
}

/// Sender of a chat message. The prompt always goes out as one user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User input.
    User,
}

/// OpenAI-compatible chat completions client.
///
/// Works with any provider that exposes the `/v1/chat/completions` endpoint:
/// OpenAI, Ollama, vLLM, LiteLLM, etc.
///
/// # Examples
///
/// ```
/// use writeme_core::LlmConfig;
/// use writeme_generate::llm::LlmClient;
///
/// let config = LlmConfig {
///     api_key: Some("test-key".into()),
///     ..LlmConfig::default()
/// };
/// let client = LlmClient::new(&config).unwrap();
/// assert_eq!(client.model(), "gpt-4o");
/// ```
pub struct LlmClient {
    client: reqwest::Client,
    config: LlmConfig,
    api_key: Option<String>,
}

impl LlmClient {
    /// Create a new LLM client from configuration.
    ///
    /// The API key comes from the config, or else from the provider's
    /// environment variable (see [`LlmConfig::api_key_env_var`]).
    ///
    /// # Errors
    ///
    /// Returns [`WritemeError::Llm`] if the HTTP client cannot be built.
    pub fn new(config: &LlmConfig) -> Result<Self, WritemeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WritemeError::Llm(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            config: config.clone(),
            api_key: config.resolved_api_key(),
        })
    }

    /// Return the model name from the configuration.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send a chat completion request and return the text response.
    ///
    /// # Errors
    ///
    /// Returns [`WritemeError::Llm`] on HTTP errors or response parsing failures.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, WritemeError> {
        let base_url = self
            .config
            .base_url
            .as_deref()
            .unwrap_or("https://api.openai.com")
            .trim_end_matches('/');
        let url = format!("{base_url}/v1/chat/completions");

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": self.config.temperature,
        });

        let mut request = self.client.post(&url);
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {api_key}"));
        }
        request = request.header("Content-Type", "application/json");

        tracing::debug!(%url, model = %self.config.model, "sending chat completion request");
        let response = request
            .json(&body)
            .send()
            .await
            .map_err(|e| WritemeError::Llm(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(WritemeError::Llm(format!(
                "LLM API error {status}: {body_text}"
            )));
        }

        let response_body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| WritemeError::Llm(format!("failed to parse response: {e}")))?;

        let content = response_body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                WritemeError::Llm(format!("unexpected response structure: {response_body}"))
            })?;

        Ok(content.to_string())
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, WritemeError> {
        let messages = vec![ChatMessage {
            role: Role::User,
            content: prompt.to_string(),
        }];
        self.chat(messages).await
    }

    fn model(&self) -> &str {
        LlmClient::model(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn config_for(server: &mockito::Server) -> LlmConfig {
        LlmConfig {
            api_key: Some("test-key".into()),
            base_url: Some(server.url()),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn client_construction_succeeds() {
        let config = LlmConfig::default();
        let client = LlmClient::new(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn model_returns_config_model() {
        let config = LlmConfig {
            model: "gpt-4o-mini".into(),
            ..LlmConfig::default()
        };
        let client = LlmClient::new(&config).unwrap();
        assert_eq!(client.model(), "gpt-4o-mini");
    }

    #[test]
    fn chat_message_serializes() {
        let msg = ChatMessage {
            role: Role::User,
            content: "hello".into(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hello");
    }

    #[tokio::test]
    async fn generate_sends_single_user_message() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "model": "gpt-4o",
                "messages": [{ "role": "user", "content": "write it" }],
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r##"{"choices":[{"message":{"role":"assistant","content":"# Demo"}}]}"##)
            .create_async()
            .await;

        let client = LlmClient::new(&config_for(&server)).unwrap();
        let text = client.generate("write it").await.unwrap();

        assert_eq!(text, "# Demo");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn http_error_is_reported_with_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;

        let client = LlmClient::new(&config_for(&server)).unwrap();
        let err = client.generate("x").await.unwrap_err();

        let msg = err.to_string();
        assert!(matches!(err, WritemeError::Llm(_)));
        assert!(msg.contains("503"), "{msg}");
        assert!(msg.contains("overloaded"), "{msg}");
    }

    #[tokio::test]
    async fn missing_choices_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = LlmClient::new(&config_for(&server)).unwrap();
        let err = client.generate("x").await.unwrap_err();
        assert!(err.to_string().contains("unexpected response structure"));
    }

    #[tokio::test]
    async fn empty_content_is_a_successful_empty_document() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":""}}]}"#)
            .create_async()
            .await;

        let client = LlmClient::new(&config_for(&server)).unwrap();
        assert_eq!(client.generate("x").await.unwrap(), "");
    }
}
