/// Shared test fixtures and utilities for test modules
pub mod fixtures {
    use telegram_relay::configuration::Settings;
    use telegram_relay::formatter::ParseMode;

    pub const TEST_TOKEN: &str = "123:ABC";
    pub const TEST_CHAT_ID: &str = "42";

    /// Settings pointed at a test API endpoint instead of api.telegram.org
    pub fn test_settings(api_base: &str, parse_mode: ParseMode) -> Settings {
        Settings {
            bot_token: TEST_TOKEN.to_string(),
            chat_id: TEST_CHAT_ID.to_string(),
            parse_mode,
            api_base: api_base.to_string(),
            listen_addr: "127.0.0.1:0".to_string(),
        }
    }

    /// Path of the sendMessage method under the test token
    pub fn send_message_path() -> String {
        format!("/bot{}/sendMessage", TEST_TOKEN)
    }

    /// Minimal valid notification body
    pub fn title_only_payload() -> &'static str {
        r#"{"title":"Deploy finished"}"#
    }

    /// Notification body exercising every field
    pub fn full_payload() -> &'static str {
        r#"{"title":"Build failed","from":"CI","description":"see logs","url":"https://x.test/y"}"#
    }

    /// Message text expected for `full_payload` in MarkdownV2 mode
    pub fn full_payload_markdown_text() -> &'static str {
        "*Build failed*\n_From: CI_\n\nsee logs\n\n[Open Link](https://x.test/y)"
    }
}
