use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::configuration::Settings;
use crate::formatter::ParseMode;
use crate::traits::NotificationSender;

use super::types::{DeliveryResult, SendMessageRequest};

/// HTTP client for the Telegram Bot API.
///
/// Holds the destination and dialect from [`Settings`] so callers only
/// supply the formatted text. The base URL is derived from the settings,
/// which lets tests point it at a local mock server.
pub struct TelegramClient {
    http: Client,
    base_url: String,
    chat_id: String,
    parse_mode: ParseMode,
}

impl TelegramClient {
    pub fn new(settings: &Settings) -> Self {
        let base_url = format!(
            "{}/bot{}",
            settings.api_base.trim_end_matches('/'),
            settings.bot_token
        );
        Self {
            http: Client::new(),
            base_url,
            chat_id: settings.chat_id.clone(),
            parse_mode: settings.parse_mode,
        }
    }

    /// Base URL used for API requests: `{api_base}/bot{token}`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the formatted text to `sendMessage` and decode the verdict.
    ///
    /// One attempt, no retries. Transport failures propagate as errors;
    /// an undecodable response body becomes an `ok: false` result carrying
    /// the raw body text.
    #[tracing::instrument(name = "send_message", skip(self, text))]
    pub async fn send_message(&self, text: &str) -> Result<DeliveryResult> {
        let url = format!("{}/sendMessage", self.base_url);
        let payload = SendMessageRequest {
            chat_id: self.chat_id.clone(),
            text: text.to_string(),
            parse_mode: self.parse_mode.as_str().to_string(),
        };

        debug!(chat_id = %self.chat_id, parse_mode = %payload.parse_mode, "sending message");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let raw = response.text().await?;
        match serde_json::from_str::<DeliveryResult>(&raw) {
            Ok(result) => Ok(result),
            Err(_) => Ok(DeliveryResult {
                ok: false,
                description: Some(raw),
            }),
        }
    }
}

#[async_trait]
impl NotificationSender for TelegramClient {
    async fn send(&self, text: &str) -> Result<DeliveryResult> {
        self.send_message(text).await
    }
}
