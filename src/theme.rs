// Theme support for the TUI
//
// Two palettes, light and dark. The active kind is applied app-wide and
// persisted in the key-value store under the `theme` key, so the choice
// survives restarts. Unknown stored values read as light.

use ratatui::style::Color;

/// The two-state theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    /// Parse a persisted value. Anything unrecognized falls back to light.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => ThemeKind::Dark,
            _ => ThemeKind::Light,
        }
    }

    /// The value written to the key-value store
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }

    /// Flip between the two states
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }

    /// Toggle-control glyph: sun while dark (click to brighten), moon while light
    pub fn icon(&self) -> &'static str {
        match self {
            ThemeKind::Light => "☾",
            ThemeKind::Dark => "☀",
        }
    }

    pub fn palette(&self) -> Theme {
        match self {
            ThemeKind::Light => Theme::light(),
            ThemeKind::Dark => Theme::dark(),
        }
    }
}

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Page colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight: Color,

    // Header (navbar) colors
    pub header_bg: Color,
    pub header_fg: Color,
    /// Brand background used once the page scrolls past the elevation threshold
    pub header_elevated_bg: Color,

    // Notification kind colors
    pub success: Color,
    pub danger: Color,
    pub info: Color,
    pub warning: Color,

    // Blocks that have not scrolled into view yet render in this color
    pub hidden: Color,
}

impl Theme {
    /// Light palette - Bootstrap-ish blues on white
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::Rgb(0xff, 0xff, 0xff),
            foreground: Color::Rgb(0x21, 0x25, 0x29), // body text
            muted: Color::Rgb(0x6c, 0x75, 0x7d),      // secondary text
            border: Color::Rgb(0xde, 0xe2, 0xe6),
            accent: Color::Rgb(0x0d, 0x6e, 0xfd),    // brand blue
            highlight: Color::Rgb(0xff, 0xc1, 0x07), // focus outline
            header_bg: Color::Rgb(0xf8, 0xf9, 0xfa),
            header_fg: Color::Rgb(0x21, 0x25, 0x29),
            header_elevated_bg: Color::Rgb(0x0d, 0x6e, 0xfd), // rgba(13,110,253,.95)
            success: Color::Rgb(0x19, 0x87, 0x54),
            danger: Color::Rgb(0xdc, 0x35, 0x45),
            info: Color::Rgb(0x0d, 0xca, 0xf0),
            warning: Color::Rgb(0xff, 0xc1, 0x07),
            hidden: Color::Rgb(0xc4, 0xc9, 0xce),
        }
    }

    /// Dark palette - same hues shifted onto a near-black page
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Rgb(0x12, 0x14, 0x17),
            foreground: Color::Rgb(0xe9, 0xec, 0xef),
            muted: Color::Rgb(0x86, 0x8e, 0x96),
            border: Color::Rgb(0x34, 0x3a, 0x40),
            accent: Color::Rgb(0x6e, 0xa8, 0xfe), // brand blue, lifted for contrast
            highlight: Color::Rgb(0xff, 0xda, 0x6a),
            header_bg: Color::Rgb(0x1a, 0x1d, 0x21),
            header_fg: Color::Rgb(0xe9, 0xec, 0xef),
            header_elevated_bg: Color::Rgb(0x0a, 0x58, 0xca),
            success: Color::Rgb(0x75, 0xb7, 0x98),
            danger: Color::Rgb(0xea, 0x86, 0x8f),
            info: Color::Rgb(0x6e, 0xdf, 0xf6),
            warning: Color::Rgb(0xff, 0xda, 0x6a),
            hidden: Color::Rgb(0x3f, 0x46, 0x4d),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        let kind = ThemeKind::default();
        assert_eq!(kind, ThemeKind::Light);
        assert_eq!(kind.toggled(), ThemeKind::Dark);
        assert_eq!(kind.toggled().toggled(), ThemeKind::Light);
    }

    #[test]
    fn unknown_name_reads_as_light() {
        assert_eq!(ThemeKind::from_name("dark"), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("light"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("solarized"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name(""), ThemeKind::Light);
    }

    #[test]
    fn icon_matches_state() {
        // Sun shown in dark mode, moon in light mode
        assert_eq!(ThemeKind::Dark.icon(), "☀");
        assert_eq!(ThemeKind::Light.icon(), "☾");
    }

    #[test]
    fn persisted_names_round_trip() {
        for kind in [ThemeKind::Light, ThemeKind::Dark] {
            assert_eq!(ThemeKind::from_name(kind.as_str()), kind);
        }
    }
}
