//! Delivery client for the Telegram Bot API `sendMessage` method.

mod client;
mod types;

pub use client::TelegramClient;
pub use types::{DeliveryResult, SendMessageRequest};
