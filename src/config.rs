// ⚙️ Configuration from environment variables
//
// | Env Var            | Default                  |
// |--------------------|--------------------------|
// | `FOLIO_DATA_DIR`   | `$HOME/.folio`           |
// | `FOLIO_LOG`        | `folio=info`             |
// | `FOLIO_BASE_URL`   | `http://localhost:3000`  |
// | `FOLIO_THEME_HINT` | derived from `COLORFGBG` |

use std::path::PathBuf;

use crate::theme::Theme;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_FILTER: &str = "folio=info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Holds `preferences.db` and `folio.log`
    pub data_dir: PathBuf,

    pub log_filter: String,

    /// Origin used when building share links
    pub base_url: String,

    /// Stands in for the system color-scheme preference
    pub theme_hint: Option<Theme>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("FOLIO_DATA_DIR")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let home = lookup("HOME").unwrap_or_else(|| ".".to_string());
                PathBuf::from(home).join(".folio")
            });

        let log_filter = lookup("FOLIO_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let base_url = lookup("FOLIO_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let theme_hint = match lookup("FOLIO_THEME_HINT") {
            Some(hint) => Theme::parse(hint.trim()),
            None => lookup("COLORFGBG").and_then(|v| theme_from_colorfgbg(&v)),
        };

        Config {
            data_dir,
            log_filter,
            base_url,
            theme_hint,
        }
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join("preferences.db")
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("folio.log")
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(".folio"),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            theme_hint: None,
        }
    }
}

/// `COLORFGBG` is "fg;bg" (sometimes "fg;default;bg"). Backgrounds 7 and 15
/// are the light ANSI colors.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(if bg == 7 || bg == 15 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[("HOME", "/home/ada")]);
        assert_eq!(cfg.data_dir, PathBuf::from("/home/ada/.folio"));
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(cfg.theme_hint, None);
        assert_eq!(cfg.log_path(), PathBuf::from("/home/ada/.folio/folio.log"));
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("FOLIO_DATA_DIR", "/tmp/folio"),
            ("FOLIO_BASE_URL", "https://folio.example.com"),
            ("FOLIO_THEME_HINT", "light"),
        ]);
        assert_eq!(cfg.preferences_path(), PathBuf::from("/tmp/folio/preferences.db"));
        assert_eq!(cfg.base_url, "https://folio.example.com");
        assert_eq!(cfg.theme_hint, Some(Theme::Light));
    }

    #[test]
    fn test_theme_hint_from_colorfgbg() {
        assert_eq!(config(&[("COLORFGBG", "0;15")]).theme_hint, Some(Theme::Light));
        assert_eq!(config(&[("COLORFGBG", "15;default;0")]).theme_hint, Some(Theme::Dark));
        assert_eq!(config(&[("COLORFGBG", "garbage")]).theme_hint, None);

        // Explicit hint wins, even if unrecognized
        assert_eq!(
            config(&[("FOLIO_THEME_HINT", "sepia"), ("COLORFGBG", "0;15")]).theme_hint,
            None
        );
    }
}
