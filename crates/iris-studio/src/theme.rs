//! Built-in themes.
//!
//! A theme is a named set of color roles plus three decorative gradients
//! (hero banner, card surface, button fill). The active theme drives the
//! panel accents and the surface color that translucent preview samples
//! composite against. The chosen id persists across sessions via
//! `SessionPrefs`; unknown stored ids fall back to the default.

/// Color roles, as CSS hex literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
}

/// Decorative gradients, as ready-to-use CSS values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeGradients {
    pub hero: &'static str,
    pub card: &'static str,
    pub button: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: ThemeColors,
    pub gradients: ThemeGradients,
}

impl Theme {
    /// Every theme except the light one renders on a dark background.
    #[inline]
    pub fn is_dark(&self) -> bool {
        self.id != "iris-light"
    }
}

/// All built-in themes; the first entry is the default.
pub const THEMES: [Theme; 5] = [
    Theme {
        id: "iris-dark",
        name: "Iris Dark",
        colors: ThemeColors {
            primary: "#8b5cf6",
            secondary: "#ec4899",
            accent: "#06b6d4",
            background: "#0f0f23",
            surface: "#1a1a2e",
            text: "#ffffff",
            muted: "#64748b",
        },
        gradients: ThemeGradients {
            hero: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            card: "linear-gradient(145deg, #1a1a2e 0%, #16213e 100%)",
            button: "linear-gradient(135deg, #8b5cf6 0%, #ec4899 100%)",
        },
    },
    Theme {
        id: "iris-light",
        name: "Iris Light",
        colors: ThemeColors {
            primary: "#8b5cf6",
            secondary: "#ec4899",
            accent: "#06b6d4",
            background: "#ffffff",
            surface: "#f8fafc",
            text: "#1e293b",
            muted: "#64748b",
        },
        gradients: ThemeGradients {
            hero: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            card: "linear-gradient(145deg, #ffffff 0%, #f1f5f9 100%)",
            button: "linear-gradient(135deg, #8b5cf6 0%, #ec4899 100%)",
        },
    },
    Theme {
        id: "cyberpunk",
        name: "Cyberpunk",
        colors: ThemeColors {
            primary: "#ff0080",
            secondary: "#00ffff",
            accent: "#ffff00",
            background: "#0a0a0a",
            surface: "#1a0a1a",
            text: "#ffffff",
            muted: "#888888",
        },
        gradients: ThemeGradients {
            hero: "linear-gradient(135deg, #ff0080 0%, #00ffff 100%)",
            card: "linear-gradient(145deg, #1a0a1a 0%, #2a0a2a 100%)",
            button: "linear-gradient(135deg, #ff0080 0%, #00ffff 100%)",
        },
    },
    Theme {
        id: "ocean",
        name: "Ocean Breeze",
        colors: ThemeColors {
            primary: "#0ea5e9",
            secondary: "#06b6d4",
            accent: "#8b5cf6",
            background: "#0f172a",
            surface: "#1e293b",
            text: "#f1f5f9",
            muted: "#64748b",
        },
        gradients: ThemeGradients {
            hero: "linear-gradient(135deg, #0ea5e9 0%, #06b6d4 100%)",
            card: "linear-gradient(145deg, #1e293b 0%, #334155 100%)",
            button: "linear-gradient(135deg, #0ea5e9 0%, #06b6d4 100%)",
        },
    },
    Theme {
        id: "sunset",
        name: "Sunset Vibes",
        colors: ThemeColors {
            primary: "#f97316",
            secondary: "#ec4899",
            accent: "#eab308",
            background: "#1c1917",
            surface: "#292524",
            text: "#fafaf9",
            muted: "#78716c",
        },
        gradients: ThemeGradients {
            hero: "linear-gradient(135deg, #f97316 0%, #ec4899 100%)",
            card: "linear-gradient(145deg, #292524 0%, #3c3c3c 100%)",
            button: "linear-gradient(135deg, #f97316 0%, #ec4899 100%)",
        },
    },
];

/// The startup theme when nothing is stored.
#[inline]
pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

/// Looks up a theme by id.
pub fn find(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_core::Color;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = THEMES.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), THEMES.len());
    }

    #[test]
    fn find_resolves_every_id() {
        for theme in &THEMES {
            assert_eq!(find(theme.id).map(|t| t.name), Some(theme.name));
        }
        assert!(find("midnight").is_none());
    }

    #[test]
    fn only_the_light_theme_is_light() {
        let dark: Vec<bool> = THEMES.iter().map(Theme::is_dark).collect();
        assert_eq!(dark, [true, false, true, true, true]);
    }

    #[test]
    fn every_color_role_parses() {
        for theme in &THEMES {
            let roles = [
                theme.colors.primary,
                theme.colors.secondary,
                theme.colors.accent,
                theme.colors.background,
                theme.colors.surface,
                theme.colors.text,
                theme.colors.muted,
            ];
            for role in roles {
                assert!(Color::parse(role).is_ok(), "{} has unparseable role {role}", theme.id);
            }
        }
    }
}
