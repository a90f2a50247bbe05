use async_trait::async_trait;
use log::{debug, trace, error};
use std::time::Duration;

use crate::config::ProviderConfig;
use crate::error::Error;
use crate::request::{ChatMessage, ChatRequest, ChatResponse};

/// Client for the hosted Sea-Lion chat-completion API
pub struct SeaLionClient
{   config: ProviderConfig
  , http_client: reqwest::Client
}

impl SeaLionClient
{   /// Build a client with the configured timeout.
    ///
    /// A missing API key is not an error here; calls report it instead.
    pub fn new(config: ProviderConfig) -> Result<Self, Error>
    {   debug!("Creating SeaLionClient for {}", config.api_url);
        let http_client = reqwest::Client::builder()
          .timeout(Duration::from_secs(config.timeout_secs))
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            Error::InvalidConfiguration(e.to_string())
          })?;

        Ok(SeaLionClient
        {   config
          , http_client
        })
    }

    fn get_api_key(&self) -> Result<&str, Error>
    {   match self.config.api_key.as_deref()
        {   Some(key) if !key.is_empty() => Ok(key)
          , _ => {
              error!("SEA_LION_API_KEY is not set");
              Err(Error::MissingApiKey)
            }
        }
    }

    async fn handle_send(
      &self
    , messages: &[ChatMessage]
    , model: &str
    , temperature: f32
    ) -> Result<String, Error>
    {   let api_key = self.get_api_key()?;

        let request = ChatRequest
        {   model: model.to_string()
          , messages: messages.to_vec()
          , temperature
        };

        trace!("Sea-Lion request: {:?}", request);

        let response = self.http_client
          .post(&self.config.api_url)
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            Error::from(e)
          })?;

        let status = response.status();
        trace!("Sea-Lion response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Sea-Lion API error {}: {}", status, error_text);
            return Err(Error::ApiError
            {   status: status.as_u16()
              , body: error_text
            });
        }

        let body = response.text().await.map_err(|e| {
          error!("Failed to read response body: {}", e);
          Error::from(e)
        })?;

        let chat_response: ChatResponse
          = serde_json::from_str(&body).map_err(|e| {
            error!("Parse error: {}", e);
            Error::from(e)
          })?;

        chat_response.first_content()
          .map(str::to_string)
          .ok_or_else(|| {
            error!("No choices in response");
            Error::NoChoicesInResponse
          })
    }
}

#[async_trait]
impl super::CompletionBackend for SeaLionClient
{   async fn complete(
      &self
    , messages: &[ChatMessage]
    , model: &str
    , temperature: Option<f32>
    ) -> crate::CompletionReply
    {   let temperature
          = temperature.unwrap_or(self.config.temperature);
        debug!(
          "Sending {} messages to model: {}",
          messages.len(), model
        );
        self.handle_send(messages, model, temperature).await
    }
}
