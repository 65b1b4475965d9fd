use anyhow::{Context, Result};

use crate::formatter::ParseMode;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

/// Process-wide configuration, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bot_token: String,
    pub chat_id: String,
    pub parse_mode: ParseMode,
    pub api_base: String,
    pub listen_addr: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .context("TELEGRAM_BOT_TOKEN is not set, create a bot with @BotFather and export its token")?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID")
            .context("TELEGRAM_CHAT_ID is not set, export the id of the destination chat")?;

        let parse_mode = match std::env::var("TELEGRAM_PARSE_MODE") {
            Ok(raw) => raw
                .parse()
                .map_err(anyhow::Error::msg)
                .context("Failed to read TELEGRAM_PARSE_MODE")?,
            Err(_) => ParseMode::MarkdownV2,
        };

        let api_base = std::env::var("TELEGRAM_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self {
            bot_token,
            chat_id,
            parse_mode,
            api_base,
            listen_addr,
        })
    }
}
