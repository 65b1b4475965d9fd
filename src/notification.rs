use serde::Deserialize;

/// Inbound notification payload, one per request.
///
/// `title` is required but modeled as an `Option` so that an absent or
/// `null` title surfaces as the missing-field response instead of a
/// deserialization error. The remaining fields are optional free text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub from: Option<String>,
}

impl Notification {
    /// The title, or empty when absent. Validation happens at the handler.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_title_only() {
        let n: Notification = serde_json::from_str(r#"{"title":"Deploy finished"}"#).unwrap();
        assert_eq!(n.title(), "Deploy finished");
        assert!(n.description.is_none());
        assert!(n.url.is_none());
        assert!(n.from.is_none());
    }

    #[test]
    fn deserialize_all_fields() {
        let n: Notification = serde_json::from_str(
            r#"{"title":"Build failed","from":"CI","description":"see logs","url":"https://x.test/y"}"#,
        )
        .unwrap();
        assert_eq!(n.title(), "Build failed");
        assert_eq!(n.from.as_deref(), Some("CI"));
        assert_eq!(n.description.as_deref(), Some("see logs"));
        assert_eq!(n.url.as_deref(), Some("https://x.test/y"));
    }

    #[test]
    fn deserialize_missing_title() {
        let n: Notification = serde_json::from_str(r#"{"description":"orphan"}"#).unwrap();
        assert!(n.title.is_none());
        assert_eq!(n.title(), "");
    }

    #[test]
    fn deserialize_null_title() {
        let n: Notification = serde_json::from_str(r#"{"title":null}"#).unwrap();
        assert!(n.title.is_none());
    }

    #[test]
    fn deserialize_rejects_non_string_title() {
        let result = serde_json::from_str::<Notification>(r#"{"title":42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let n: Notification =
            serde_json::from_str(r#"{"title":"ok","priority":"high"}"#).unwrap();
        assert_eq!(n.title(), "ok");
    }
}
