use std::str::FromStr;

use crate::notification::Notification;

/// Characters Telegram requires to be backslash-escaped in MarkdownV2 text.
const MARKDOWN_ESCAPE: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!', '\\',
];

/// Markup dialect understood by the Telegram message renderer.
///
/// Selects the escaping rules and inline wrappers as one unit so the two
/// dialects cannot be mixed within a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    MarkdownV2,
    Html,
}

impl ParseMode {
    /// Dialect flag as the Bot API expects it in `parse_mode`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::MarkdownV2 => "MarkdownV2",
            ParseMode::Html => "HTML",
        }
    }

    /// Escape user-supplied text for interpolation into message markup.
    pub fn escape_text(&self, text: &str) -> String {
        match self {
            ParseMode::MarkdownV2 => escape_markdown(text),
            ParseMode::Html => escape_html(text),
        }
    }

    /// Escape a URL for the link position. HTML link targets are inserted
    /// verbatim; only the MarkdownV2 `(url)` syntax needs escaping.
    pub fn escape_url(&self, url: &str) -> String {
        match self {
            ParseMode::MarkdownV2 => escape_markdown_url(url),
            ParseMode::Html => url.to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        match self {
            ParseMode::MarkdownV2 => format!("*{text}*"),
            ParseMode::Html => format!("<b>{text}</b>"),
        }
    }

    fn italic(&self, text: &str) -> String {
        match self {
            ParseMode::MarkdownV2 => format!("_{text}_"),
            ParseMode::Html => format!("<i>{text}</i>"),
        }
    }

    fn link(&self, label: &str, url: &str) -> String {
        match self {
            ParseMode::MarkdownV2 => format!("[{label}]({url})"),
            ParseMode::Html => format!("<a href=\"{url}\">{label}</a>"),
        }
    }
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdownv2" => Ok(ParseMode::MarkdownV2),
            "html" => Ok(ParseMode::Html),
            other => Err(format!("unsupported parse mode: {other}")),
        }
    }
}

/// Build the outgoing message text from a notification.
///
/// Line structure is fixed: bold title, optional italic `From:` line,
/// optional description after a blank line, optional `Open Link` link
/// after a blank line. Empty optional fields are skipped like absent ones.
pub fn format_message(notification: &Notification, mode: ParseMode) -> String {
    let mut msg = mode.bold(&mode.escape_text(notification.title()));

    if let Some(from) = non_empty(&notification.from) {
        msg.push('\n');
        msg.push_str(&mode.italic(&format!("From: {}", mode.escape_text(from))));
    }

    if let Some(description) = non_empty(&notification.description) {
        msg.push_str("\n\n");
        msg.push_str(&mode.escape_text(description));
    }

    if let Some(url) = non_empty(&notification.url) {
        msg.push_str("\n\n");
        msg.push_str(&mode.link("Open Link", &mode.escape_url(url)));
    }

    msg
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Backslash-escape every MarkdownV2 control character in text position.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_ESCAPE.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// MarkdownV2 link targets only need `)` and `\` escaped.
pub fn escape_markdown_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        if matches!(c, ')' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Entity-escape HTML text. Ampersand goes first so produced entities are
/// not escaped a second time.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
