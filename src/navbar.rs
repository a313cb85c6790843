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
use eframe::egui::{Pos2, Rect};
use log::debug;


// Expanded/collapsed state behind the burger control
// The burger highlight and the menu panel both render from this one
// flag, so the two can never disagree
#[derive(Debug, Default, Clone)]
pub struct NavMenu {
    // True while the menu panel is shown
    expanded: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    // Flips the menu state, wired to the burger control
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        debug!(
            "navigation menu {}",
            if self.expanded { "expanded" } else { "collapsed" }
        );
    }

    // Closes the menu, wired to the outside-click guard
    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// Screen regions the navigation bar covered this frame.
#[derive(Debug, Clone, Copy)]
pub struct NavRegions {
    /// The bar itself, burger and theme toggle included.
    pub bar: Rect,

    /// The menu panel, present only while the menu is expanded.
    pub menu: Option<Rect>,
}

impl NavRegions {
    pub fn contains(&self, pos: Pos2) -> bool {
        self.bar.contains(pos) || self.menu.is_some_and(|menu| menu.contains(pos))
    }
}

/// What the pointer did this frame, as far as the collapse decision cares.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickProbe {
    /// Position of this frame's primary click, if one happened.
    pub click_pos: Option<Pos2>,

    /// True when that click landed on the theme toggle control.
    pub on_theme_toggle: bool,
}

/// Decides whether an open menu collapses in response to this frame's
/// input. The guards run in a fixed order and every one has to pass:
///
/// 1. the menu is currently open,
/// 2. a primary click happened this frame,
/// 3. the click did not land on the theme toggle,
/// 4. the click landed outside every navigation region.
pub fn should_collapse(menu_open: bool, probe: &ClickProbe, regions: &NavRegions) -> bool {
    if !menu_open {
        return false;
    }

    let Some(pos) = probe.click_pos else {
        return false;
    };

    if probe.on_theme_toggle {
        return false;
    }

    !regions.contains(pos)
}


#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    fn regions_with_menu() -> NavRegions {
        NavRegions {
            bar: Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 40.0)),
            menu: Some(Rect::from_min_max(pos2(0.0, 40.0), pos2(800.0, 120.0))),
        }
    }

    fn click_at(x: f32, y: f32) -> ClickProbe {
        ClickProbe {
            click_pos: Some(pos2(x, y)),
            on_theme_toggle: false,
        }
    }

    #[test]
    fn toggle_twice_restores_the_original_state() {
        let mut menu = NavMenu::new();
        assert!(!menu.is_expanded());

        menu.toggle();
        assert!(menu.is_expanded());

        menu.toggle();
        assert!(!menu.is_expanded());
    }

    #[test]
    fn collapse_is_idempotent() {
        let mut menu = NavMenu::new();
        menu.toggle();

        menu.collapse();
        assert!(!menu.is_expanded());

        menu.collapse();
        assert!(!menu.is_expanded());
    }

    #[test]
    fn outside_click_collapses_an_open_menu() {
        assert!(should_collapse(true, &click_at(400.0, 300.0), &regions_with_menu()));
    }

    #[test]
    fn nothing_happens_without_a_click() {
        let probe = ClickProbe::default();
        assert!(!should_collapse(true, &probe, &regions_with_menu()));
    }

    #[test]
    fn a_closed_menu_is_left_alone() {
        assert!(!should_collapse(false, &click_at(400.0, 300.0), &regions_with_menu()));
    }

    #[test]
    fn clicks_on_the_bar_keep_the_menu_open() {
        assert!(!should_collapse(true, &click_at(400.0, 20.0), &regions_with_menu()));
    }

    #[test]
    fn clicks_inside_the_menu_keep_it_open() {
        assert!(!should_collapse(true, &click_at(400.0, 80.0), &regions_with_menu()));
    }

    #[test]
    fn theme_toggle_clicks_never_collapse() {
        // Even with a position outside every region, the toggle guard
        // runs before the geometry check
        let probe = ClickProbe {
            click_pos: Some(pos2(400.0, 300.0)),
            on_theme_toggle: true,
        };
        assert!(!should_collapse(true, &probe, &regions_with_menu()));
    }

    #[test]
    fn missing_menu_region_shrinks_the_inside_area() {
        let regions = NavRegions {
            bar: Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 40.0)),
            menu: None,
        };

        // A click where the menu panel would be counts as outside
        assert!(should_collapse(true, &click_at(400.0, 80.0), &regions));
    }
}
