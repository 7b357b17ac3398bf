//! Document model.
//!
//! ## Learning: Newtypes and Closed Enums
//!
//! `FileId` is a newtype wrapper around `String`. This provides:
//! - Type safety: Can't accidentally use an arbitrary string as a file ID
//! - Encapsulation: Can change the underlying type without breaking APIs
//! - Documentation: The type name explains its purpose
//!
//! `Language` is a closed enum rather than a free-form string, so a file
//! tagged with an unsupported language is unrepresentable.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CoreError;

/// Unique identifier for an open file.
///
/// Ids are assigned at creation and never change; [`crate::Session`]
/// guarantees uniqueness across the open set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(String);

impl FileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Language tag of a file; decides which rendering collaborator handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Typst,
    Markdown,
    Text,
}

impl Language {
    /// Returns the lowercase tag used in display and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Typst => "typst",
            Language::Markdown => "markdown",
            Language::Text => "text",
        }
    }

    /// Human-readable label for the UI ("Typst", not "typst").
    pub fn label(&self) -> &'static str {
        match self {
            Language::Typst => "Typst",
            Language::Markdown => "Markdown",
            Language::Text => "Text",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "typst" => Ok(Language::Typst),
            "markdown" => Ok(Language::Markdown),
            "text" => Ok(Language::Text),
            other => Err(CoreError::UnknownLanguage(other.to_string())),
        }
    }
}

/// An in-memory editable text buffer with identity, display name, language
/// tag, and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Stable identifier, immutable after creation
    pub id: FileId,

    /// Display filename, mutable via rename
    pub name: String,

    /// Language tag
    pub language: Language,

    /// Full text body
    pub content: String,

    /// True when content diverges from the last persisted snapshot
    #[serde(default)]
    pub is_unsaved: bool,
}

impl File {
    /// Creates a file with pristine (saved) content.
    pub fn new(
        id: impl Into<FileId>,
        name: impl Into<String>,
        language: Language,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            language,
            content: content.into(),
            is_unsaved: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file_is_saved() {
        let file = File::new("1", "main.typ", Language::Typst, "= Hello");
        assert_eq!(file.id.as_str(), "1");
        assert_eq!(file.name, "main.typ");
        assert!(!file.is_unsaved);
    }

    #[test]
    fn test_language_round_trip() {
        for lang in [Language::Typst, Language::Markdown, Language::Text] {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!("latex".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde_is_lowercase() {
        let json = serde_json::to_string(&Language::Typst).unwrap();
        assert_eq!(json, "\"typst\"");
    }
}
