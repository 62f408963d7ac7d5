//! Color palettes for the dark and light themes.
//!
//! The app root declares the active palette as CSS custom properties; the
//! stylesheet only refers to the variables.

use folio_core::Theme;

/// Colors that differ between themes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub bg_alt: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub accent_glow: &'static str,
}

// === DARK ===
pub const DARK: Palette = Palette {
    bg: "#0b0f17",
    bg_alt: "#111827",
    surface: "#161e2e",
    border: "#243045",
    text: "#e5e7eb",
    text_muted: "#94a3b8",
    accent: "#38bdf8",
    accent_glow: "rgba(56, 189, 248, 0.3)",
};

// === LIGHT ===
pub const LIGHT: Palette = Palette {
    bg: "#f8fafc",
    bg_alt: "#eef2f7",
    surface: "#ffffff",
    border: "#dbe3ee",
    text: "#0f172a",
    text_muted: "#475569",
    accent: "#0284c7",
    accent_glow: "rgba(2, 132, 199, 0.25)",
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    /// CSS custom property declarations for this palette
    pub fn css_vars(&self) -> String {
        format!(
            "--bg: {}; --bg-alt: {}; --surface: {}; --border: {}; --text: {}; --text-muted: {}; --accent: {}; --accent-glow: {};",
            self.bg,
            self.bg_alt,
            self.surface,
            self.border,
            self.text,
            self.text_muted,
            self.accent,
            self.accent_glow
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_per_theme() {
        assert_eq!(Palette::for_theme(Theme::Dark), DARK);
        assert_eq!(Palette::for_theme(Theme::Light), LIGHT);
    }

    #[test]
    fn css_vars_lists_accent() {
        assert!(DARK.css_vars().contains("--accent: #38bdf8;"));
    }
}
