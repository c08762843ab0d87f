use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Text that is either compiled in (`&'static str`) or loaded from a data file.
pub type Text = Cow<'static, str>;

/// One showcased project.
///
/// Optional fields stay `None` when absent and are left out of serialized
/// output, so "no link" never turns into `href = ""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    pub title: Text,

    pub description: Text,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<Text>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_src: Option<Text>,

    /// Author's own work, as opposed to a reference entry.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_authored: Option<bool>,
}

impl Project {
    pub fn new(title: impl Into<Text>, description: impl Into<Text>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            href: None,
            img_src: None,
            self_authored: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<Text>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_img_src(mut self, img_src: impl Into<Text>) -> Self {
        self.img_src = Some(img_src.into());
        self
    }

    pub fn with_self(mut self, self_authored: bool) -> Self {
        self.self_authored = Some(self_authored);
        self
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn img_src(&self) -> Option<&str> {
        self.img_src.as_deref()
    }

    /// Absent reads as `false`.
    pub fn is_self(&self) -> bool {
        self.self_authored.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_record_keeps_optionals_absent() {
        let p = Project::new("Bare", "Only the required fields.");
        assert_eq!(p.href(), None);
        assert_eq!(p.img_src(), None);
        assert_eq!(p.self_authored, None);
        assert!(!p.is_self());
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let p = Project::new("Bare", "Only the required fields.");
        let v = serde_json::to_value(&p).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(!obj.contains_key("href"));
        assert!(!obj.contains_key("imgSrc"));
        assert!(!obj.contains_key("self"));
    }

    #[test]
    fn wire_names_match_renderer() {
        let p = Project::new("T", "D")
            .with_href("https://example.com")
            .with_img_src("/static/images/t.png")
            .with_self(false);
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["imgSrc"], "/static/images/t.png");
        assert_eq!(v["self"], false);
        assert_eq!(v["href"], "https://example.com");
    }

    #[test]
    fn explicit_false_differs_from_absent() {
        let a = Project::new("T", "D");
        let b = Project::new("T", "D").with_self(false);
        assert_ne!(a, b);
        assert_eq!(a.is_self(), b.is_self());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = serde_json::from_str::<Project>(
            r#"{"title":"T","description":"D","link":"https://x"}"#,
        );
        assert!(err.is_err());
    }
}
