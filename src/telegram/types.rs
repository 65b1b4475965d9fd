use serde::{Deserialize, Serialize};

/// Request body for the `sendMessage` API method.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    /// Target chat identifier. Telegram accepts numeric ids as strings.
    pub chat_id: String,
    /// Formatted message text.
    pub text: String,
    /// Markup dialect flag matching how `text` was escaped.
    pub parse_mode: String,
}

/// Provider verdict decoded from the `sendMessage` response.
///
/// The Bot API wraps every response as `{ ok, description?, ... }`; only
/// these two fields matter for relaying. When the response body is not
/// JSON at all (an upstream gateway error page, say), the client
/// synthesizes `ok: false` with the raw body as the description.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryResult {
    pub ok: bool,
    pub description: Option<String>,
}
