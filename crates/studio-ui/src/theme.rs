//! VS-style theme palette.
//!
//! The palette is process-wide constant data: seven semantic roles mapped
//! to literal hex colors, loaded once and never mutated. View code uses the
//! pre-converted constants in [`colors`]; the hex mapping itself is the
//! contract other components (and tests) enumerate.

use iced::Color;

/// Fixed mapping from semantic UI roles to hex color values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VsTheme {
    pub background: &'static str,
    pub sidebar_bg: &'static str,
    pub activity_bar_bg: &'static str,
    pub status_bar_bg: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

/// The studio's dark palette.
pub const VS_THEME: VsTheme = VsTheme {
    background: "#1e1e1e",
    sidebar_bg: "#252526",
    activity_bar_bg: "#333333",
    status_bar_bg: "#007acc",
    border: "#3e3e42",
    text: "#cccccc",
    accent: "#007acc",
};

impl VsTheme {
    /// Enumerates every role with its hex value, in declaration order.
    pub fn roles(&self) -> [(&'static str, &'static str); 7] {
        [
            ("background", self.background),
            ("sidebar_bg", self.sidebar_bg),
            ("activity_bar_bg", self.activity_bar_bg),
            ("status_bar_bg", self.status_bar_bg),
            ("border", self.border),
            ("text", self.text),
            ("accent", self.accent),
        ]
    }
}

/// Parses a `#rrggbb` hex color. Returns None on any malformed input.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::from_rgb8(r, g, b))
}

/// Palette constants for view code, one per [`VsTheme`] role plus a few
/// derived shades for interactive states.
pub mod colors {
    use iced::Color;

    /// `Color::from_rgb8` is not a const fn in iced 0.13; this does the
    /// identical conversion in a const-callable way.
    const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub const BG: Color = rgb8(0x1e, 0x1e, 0x1e);
    pub const SIDEBAR_BG: Color = rgb8(0x25, 0x25, 0x26);
    pub const ACTIVITY_BAR_BG: Color = rgb8(0x33, 0x33, 0x33);
    pub const STATUS_BAR_BG: Color = rgb8(0x00, 0x7a, 0xcc);
    pub const BORDER: Color = rgb8(0x3e, 0x3e, 0x42);
    pub const TEXT: Color = rgb8(0xcc, 0xcc, 0xcc);
    pub const ACCENT: Color = rgb8(0x00, 0x7a, 0xcc);

    // Derived shades, not part of the seven-role contract
    pub const TEXT_BRIGHT: Color = Color::WHITE;
    pub const TEXT_MUTED: Color = rgb8(0x73, 0x73, 0x78);
    pub const BG_HOVER: Color = rgb8(0x2a, 0x2d, 0x2e);
    pub const SELECTION: Color = Color::from_rgba(0.0, 0.48, 0.8, 0.35);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_has_exactly_seven_nonempty_roles() {
        let roles = VS_THEME.roles();
        assert_eq!(roles.len(), 7);
        for (role, hex) in roles {
            assert!(!hex.is_empty(), "role {role} has an empty color");
            assert!(parse_hex(hex).is_some(), "role {role} has malformed color {hex}");
        }
    }

    #[test]
    fn test_theme_is_deterministic() {
        let first = VS_THEME.roles();
        let second = VS_THEME.roles();
        assert_eq!(first, second);
    }

    #[test]
    fn test_view_constants_agree_with_the_hex_mapping() {
        let expected = [
            colors::BG,
            colors::SIDEBAR_BG,
            colors::ACTIVITY_BAR_BG,
            colors::STATUS_BAR_BG,
            colors::BORDER,
            colors::TEXT,
            colors::ACCENT,
        ];
        for ((role, hex), color) in VS_THEME.roles().into_iter().zip(expected) {
            assert_eq!(parse_hex(hex), Some(color), "role {role} diverged");
        }
    }

    #[test]
    fn test_parse_hex_rejects_malformed_input() {
        for bad in ["", "#", "1e1e1e", "#1e1e1", "#1e1e1ee", "#zzzzzz", "#1e 1e1"] {
            assert_eq!(parse_hex(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_parse_hex_round_trip() {
        let color = parse_hex("#007acc").unwrap();
        assert_eq!(color, Color::from_rgb8(0, 122, 204));
    }
}
