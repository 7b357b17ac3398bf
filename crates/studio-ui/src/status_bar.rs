//! Read-only session status bar.
//!
//! A pure presentational component: given a cursor position and the saving
//! flag it produces a single-line bar, with no state, no side effects, and
//! no error conditions. Inputs are rendered as given — a zero or negative
//! position supplied by the caller shows up verbatim.

use iced::widget::{container, horizontal_space, row, text};
use iced::{Background, Element, Length, Padding};

use crate::theme::colors;

/// Branch label shown next to the remote indicator.
const BRANCH: &str = "master*";

/// Session metadata rendered as a one-line bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBar {
    /// 1-based cursor row
    pub line: u32,

    /// 1-based cursor column
    pub col: u32,

    /// True while a save is in flight
    pub is_saving: bool,
}

impl StatusBar {
    pub fn new(line: u32, col: u32, is_saving: bool) -> Self {
        Self {
            line,
            col,
            is_saving,
        }
    }

    /// The exact cursor segment, `"Ln {line}, Col {col}"`.
    pub fn cursor_label(&self) -> String {
        format!("Ln {}, Col {}", self.line, self.col)
    }

    /// Left section: remote indicator, branch label, and — only while a
    /// save is in flight — the saving indicator.
    pub fn left_segments(&self) -> Vec<String> {
        let mut segments = vec!["REMOTE".to_string(), BRANCH.to_string()];
        if self.is_saving {
            segments.push("Saving...".to_string());
        }
        segments
    }

    /// Right section: cursor, encoding, language, and formatter segments.
    pub fn right_segments(&self) -> [String; 4] {
        [
            self.cursor_label(),
            "UTF-8".to_string(),
            "Typst".to_string(),
            "Prettier".to_string(),
        ]
    }

    /// Renders the bar. Emits no messages and never fails.
    pub fn view<'a, M: 'a>(&self) -> Element<'a, M> {
        let mut bar = row![].spacing(16).align_y(iced::Alignment::Center);

        for (i, segment) in self.left_segments().into_iter().enumerate() {
            let label = if i == 0 {
                // Remote indicator glyph ahead of the first segment
                format!("\u{23FA} {segment}")
            } else {
                segment
            };
            bar = bar.push(text(label).size(12).color(colors::TEXT_BRIGHT));
        }

        bar = bar.push(horizontal_space());

        for segment in self.right_segments() {
            bar = bar.push(text(segment).size(12).color(colors::TEXT_BRIGHT));
        }

        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(24.0))
            .padding(Padding::from([0, 12]))
            .align_y(iced::alignment::Vertical::Center)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::STATUS_BAR_BG)),
                ..Default::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Flattens the text model the way the rendered bar lays it out.
    fn rendered(bar: &StatusBar) -> String {
        format!(
            "{} | {}",
            bar.left_segments().join(" "),
            bar.right_segments().join(" ")
        )
    }

    #[test]
    fn test_idle_bar_omits_saving() {
        let bar = StatusBar::new(12, 5, false);
        let output = rendered(&bar);
        assert!(output.contains("Ln 12, Col 5"));
        assert!(!output.contains("Saving"));
    }

    #[test]
    fn test_saving_bar_shows_both() {
        let bar = StatusBar::new(1, 1, true);
        let output = rendered(&bar);
        assert!(output.contains("Ln 1, Col 1"));
        assert!(output.contains("Saving..."));
    }

    #[test]
    fn test_fixed_segments() {
        let bar = StatusBar::new(3, 7, false);
        assert_eq!(bar.left_segments(), vec!["REMOTE", "master*"]);
        assert_eq!(
            bar.right_segments(),
            ["Ln 3, Col 7", "UTF-8", "Typst", "Prettier"]
        );
    }

    #[test]
    fn test_out_of_range_positions_render_verbatim() {
        // Validation is the caller's job; nothing is clamped or rejected.
        assert_eq!(StatusBar::new(0, 0, false).cursor_label(), "Ln 0, Col 0");
    }

    proptest! {
        #[test]
        fn cursor_label_is_exact(line in 1u32.., col in 1u32..) {
            let bar = StatusBar::new(line, col, false);
            // prop_assert! reuses the stringified expression as a format
            // string, so the format! call must live outside the macro.
            let expected = format!("Ln {line}, Col {col}");
            prop_assert_eq!(bar.cursor_label(), expected.clone());
            prop_assert!(rendered(&bar).contains(&expected));
        }

        #[test]
        fn saving_appears_iff_flag_is_set(line in 1u32..10_000, col in 1u32..10_000, saving: bool) {
            let bar = StatusBar::new(line, col, saving);
            prop_assert_eq!(rendered(&bar).contains("Saving..."), saving);
        }

        #[test]
        fn double_toggle_is_identity(line in 1u32..10_000, col in 1u32..10_000, saving: bool) {
            let original = StatusBar::new(line, col, saving);
            let toggled_twice = StatusBar::new(line, col, !!saving);
            prop_assert_eq!(rendered(&original), rendered(&toggled_twice));
        }
    }
}
