//! Deterministic bootstrap content.
//!
//! A fresh session opens with illustrative Typst documents instead of an
//! empty workspace. The output is constant: no I/O, no randomness, so two
//! calls always yield structurally identical data.

use crate::document::{File, Language};

const MAIN_TYP: &str = r#"= Introduction to Typst

This is a local, offline version of the studio.

== Formatting

You can use *bold* text, _italic_ text, and lists.

- Item 1
- Item 2

== Math Stub

$ E = m c^2 $

== Conclusion

Press Render to see the HTML conversion."#;

const STYLES_TYP: &str = r#"// Local rendering does not support imports yet
#let corporate-theme(body) = {
  body
}"#;

/// Returns the fixed ordered sequence of files a new session opens with.
///
/// Callers copy this template data into session state; mutating the result
/// never affects later calls.
pub fn initial_files() -> Vec<File> {
    vec![
        File::new("1", "main.typ", Language::Typst, MAIN_TYP),
        File::new("2", "styles.typ", Language::Typst, STYLES_TYP),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_two_typst_files() {
        let files = initial_files();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].id.as_str(), "1");
        assert_eq!(files[1].id.as_str(), "2");
        assert_eq!(files[0].name, "main.typ");
        assert_eq!(files[1].name, "styles.typ");
        assert!(files.iter().all(|f| f.language == Language::Typst));
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(initial_files(), initial_files());
    }

    #[test]
    fn test_seed_starts_saved_and_non_empty() {
        for file in initial_files() {
            assert!(!file.is_unsaved);
            assert!(!file.content.is_empty());
        }
    }
}
