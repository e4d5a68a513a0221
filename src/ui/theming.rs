// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection, persisted in the configuration file.

use iced::Theme;
use serde::{Deserialize, Serialize};

/// How the application picks between light and dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    /// Follow the operating system preference.
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// Resolves this mode to a concrete iced theme.
    ///
    /// `System` consults the desktop preference and falls back to light
    /// when detection is unavailable.
    pub fn theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => Theme::Dark,
                _ => Theme::Light,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_to_matching_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }

    #[test]
    fn theme_mode_round_trips_through_toml() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }

        let serialized = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .expect("serialize theme mode");
        assert!(serialized.contains("dark"));

        let parsed: Wrapper = toml::from_str("mode = \"system\"").expect("parse theme mode");
        assert_eq!(parsed.mode, ThemeMode::System);
    }
}
