// MIT License
// Copyright (c) Valan Sai 2025
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.


// External crates
use eframe::egui::{Color32, Visuals};
use log::debug;

// Standard library
use std::fmt;
use std::str::FromStr;

// local
use crate::prefs::PrefStore;


/// Preference slot holding the active theme name.
pub const THEME_KEY: &str = "app_theme";

// UI theme settings for the application
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Theme {
    #[default]
    Light, // Plain bright visuals
    Dark,  // Dark mode visuals
    Sepia, // Warm paper-like visuals
}

impl Theme {
    // Fixed cycle order driven by the toolbar toggle
    pub fn next(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Sepia,
            Theme::Sepia => Theme::Light,
        }
    }

    // Name stored under THEME_KEY
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
        }
    }

    // Icon shown on the toolbar toggle while this theme is active
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🎨",
            Theme::Dark => "☀",
            Theme::Sepia => "🌙",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Sepia => "Sepia",
        }
    }

    /// Builds the egui visuals for this theme.
    pub fn visuals(self) -> Visuals {
        match self {
            Theme::Light => Visuals::light(),
            Theme::Dark => Visuals::dark(),
            Theme::Sepia => {
                // Warm paper palette on top of the stock light visuals
                let mut visuals = Visuals::light();
                visuals.override_text_color = Some(Color32::from_rgb(91, 70, 54));
                visuals.window_fill = Color32::from_rgb(244, 232, 208);
                visuals.panel_fill = Color32::from_rgb(244, 232, 208);
                visuals.extreme_bg_color = Color32::from_rgb(233, 219, 193);
                visuals.faint_bg_color = Color32::from_rgb(238, 225, 200);
                visuals.hyperlink_color = Color32::from_rgb(141, 90, 44);
                visuals
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "sepia" => Ok(Theme::Sepia),
            _ => Err(()),
        }
    }
}

/// Owns the active theme and keeps the persisted slot in sync with it.
pub struct ThemeController {
    current: Theme, // Theme applied to the UI this frame
}

impl ThemeController {
    /// Restores the persisted theme, falling back to light when the slot
    /// is missing or holds an unknown name. The resolved theme is applied
    /// right away, which also rewrites the slot in normalized form.
    pub fn restore(store: &mut dyn PrefStore) -> Self {
        let theme = match store.get(THEME_KEY) {
            Some(value) => match value.parse::<Theme>() {
                Ok(theme) => theme,
                Err(_) => {
                    debug!("unknown stored theme {:?}, falling back to light", value);
                    Theme::default()
                }
            },
            None => Theme::default(),
        };

        let mut controller = Self { current: theme };
        controller.apply(theme, store);
        controller
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Makes `theme` the active theme and persists it in the same step.
    pub fn apply(&mut self, theme: Theme, store: &mut dyn PrefStore) {
        self.current = theme;
        store.set(THEME_KEY, theme.as_str());
        debug!("applied {} theme", theme);
    }

    /// Advances to the next theme in the fixed cycle order.
    pub fn cycle(&mut self, store: &mut dyn PrefStore) -> Theme {
        let next = self.current.next();
        self.apply(next, store);
        next
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPrefStore;

    #[test]
    fn cycle_order_is_fixed() {
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::Sepia);
        assert_eq!(Theme::Sepia.next(), Theme::Light);
    }

    #[test]
    fn three_steps_return_to_start() {
        for theme in [Theme::Light, Theme::Dark, Theme::Sepia] {
            assert_eq!(theme.next().next().next(), theme);
        }
    }

    #[test]
    fn names_parse_back() {
        for theme in [Theme::Light, Theme::Dark, Theme::Sepia] {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("SEPIA".parse::<Theme>(), Ok(Theme::Sepia));
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!("solarized".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn toggle_icons_match_active_theme() {
        assert_eq!(Theme::Light.icon(), "🎨");
        assert_eq!(Theme::Dark.icon(), "☀");
        assert_eq!(Theme::Sepia.icon(), "🌙");
    }

    #[test]
    fn apply_persists_the_new_theme() {
        let mut store = MemoryPrefStore::new();
        let mut controller = ThemeController::restore(&mut store);

        controller.apply(Theme::Sepia, &mut store);

        assert_eq!(controller.current(), Theme::Sepia);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("sepia"));
    }

    #[test]
    fn cycle_applies_and_persists_each_step() {
        let mut store = MemoryPrefStore::new();
        let mut controller = ThemeController::restore(&mut store);

        assert_eq!(controller.cycle(&mut store), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        assert_eq!(controller.cycle(&mut store), Theme::Sepia);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("sepia"));

        assert_eq!(controller.cycle(&mut store), Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn restore_defaults_to_light_on_empty_store() {
        let mut store = MemoryPrefStore::new();
        let controller = ThemeController::restore(&mut store);

        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn restore_normalizes_unknown_stored_names() {
        let mut store = MemoryPrefStore::new();
        store.set(THEME_KEY, "banana");

        let controller = ThemeController::restore(&mut store);

        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn restore_picks_up_persisted_theme() {
        let mut store = MemoryPrefStore::new();
        store.set(THEME_KEY, "sepia");

        let controller = ThemeController::restore(&mut store);
        assert_eq!(controller.current(), Theme::Sepia);
    }
}
