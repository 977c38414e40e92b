// 🎨 Theme - process-wide light/dark choice, passed around explicitly
//
// Init order: stored preference, then the system hint, then Dark.

use crate::preferences::{Preferences, THEME_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Rgb(248, 249, 250),
                text: Rgb(33, 37, 41),
                muted: Rgb(108, 117, 125),
                primary: Rgb(13, 110, 253),
                accent: Rgb(111, 66, 193),
                border: Rgb(206, 212, 218),
                success: Rgb(40, 167, 69),
                error: Rgb(220, 53, 69),
            },
            Theme::Dark => Palette {
                background: Rgb(18, 18, 18),
                text: Rgb(230, 230, 230),
                muted: Rgb(150, 150, 150),
                primary: Rgb(100, 181, 246),
                accent: Rgb(186, 104, 200),
                border: Rgb(66, 66, 66),
                success: Rgb(102, 187, 106),
                error: Rgb(239, 83, 80),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors the renderer draws with for the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub primary: Rgb,
    pub accent: Rgb,
    pub border: Rgb,
    pub success: Rgb,
    pub error: Rgb,
}

/// Owner of the active theme. The shell holds one and hands `theme()` down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeContext {
    theme: Theme,
}

impl ThemeContext {
    /// Stored preference wins over the system hint; unknown stored values are ignored
    pub fn init(prefs: &Preferences, system_hint: Option<Theme>) -> Self {
        let stored = prefs.load_opt(THEME_KEY).and_then(|v| {
            let parsed = Theme::parse(&v);
            if parsed.is_none() {
                tracing::debug!(value = %v, "ignoring unrecognized stored theme");
            }
            parsed
        });

        let theme = stored.or(system_hint).unwrap_or_default();
        tracing::debug!(theme = theme.as_str(), "theme initialized");
        ThemeContext { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Flip and persist
    pub fn toggle(&mut self, prefs: &mut Preferences) -> Theme {
        self.theme = self.theme.toggled();
        prefs.save(THEME_KEY, self.theme.as_str());
        self.theme
    }
}
