// MIT License
// Copyright (c) Valan Sai 2025
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions.
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
use eframe::egui::{self, Align, CentralPanel, Context, Layout, TopBottomPanel};
use log::debug;

// Standard library
use std::time::Duration;

// local
use crate::navbar::{self, ClickProbe, NavMenu, NavRegions};
use crate::notices::{self, NoticeBoard};
use crate::prefs::{MemoryPrefStore, PrefStore};
use crate::request::{RequestForm, RideRequest};
use crate::tabs::{home_tabs, render_about_view, render_home_view, render_requests_view, TabStrip};
use crate::theme::ThemeController;


pub static VERSION: &str = "0.1.0";


// Views reachable from the navigation menu
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Home,     // Landing view with the audience tabs
    Requests, // Transport request form and session list
    About,    // Version and contact details
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Requests, View::About];

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "🏠 Home",
            View::Requests => "📝 Requests",
            View::About => "ℹ About",
        }
    }
}

// What the navigation bar reported for this frame
struct NavbarFrame {
    regions: NavRegions,
    theme_toggle_clicked: bool,
}

pub struct DeskApp {
    // Core application state
    pub prefs: Box<dyn PrefStore>, // Preference storage behind the get/set boundary
    pub theme: ThemeController,    // Active theme, kept in sync with prefs
    pub nav: NavMenu,              // Burger menu state
    pub notices: NoticeBoard,      // Dismissible banners
    pub view: View,                // Currently shown view
    pub last_view: Option<View>,   // Back target for the floating control

    // Home view state
    pub home_tabs: TabStrip, // Audience switcher on the home view

    // Requests view state
    pub request_form: RequestForm, // Draft bound to the form widgets
    pub requests: Vec<RideRequest>, // Requests submitted this session
}

impl Default for DeskApp {
    fn default() -> Self {
        Self::new(Box::new(MemoryPrefStore::new()))
    }
}

impl DeskApp {
    /// Builds the app on top of `store`, restoring the persisted theme.
    pub fn new(mut store: Box<dyn PrefStore>) -> Self {
        let theme = ThemeController::restore(store.as_mut());

        Self {
            prefs: store,                         // Preference storage
            theme,                                // Restored theme
            nav: NavMenu::new(),                  // Menu starts collapsed
            notices: NoticeBoard::new(),          // No banners yet
            view: View::Home,                     // Land on the home view
            last_view: None,                      // Nothing to go back to
            home_tabs: home_tabs(),               // First audience tab active
            request_form: RequestForm::default(), // Empty draft
            requests: Vec::new(),                 // Nothing submitted yet
        }
    }

    /// Switches to `view`, remembering the previous one as back target.
    pub fn navigate(&mut self, view: View) {
        if view == self.view {
            return;
        }

        self.last_view = Some(self.view);
        self.view = view;
        debug!("showing {:?} view", view);
    }

    /// Returns to the previously shown view, or home.
    pub fn go_back(&mut self) {
        self.view = self.last_view.take().unwrap_or(View::Home);
    }

    /// The floating back control exists on every view except home.
    pub fn back_control_shown(&self) -> bool {
        self.view != View::Home
    }

    /// Submits the current draft, reporting the outcome on the notice
    /// board. A rejected draft stays in the form for correction.
    pub fn submit_request(&mut self) {
        match self.request_form.submit() {
            Ok(request) => {
                self.notices
                    .push_success(format!("Request for {} submitted", request.passenger));
                self.requests.insert(0, request);
            }
            Err(e) => {
                self.notices.push_error(e);
            }
        }
    }

    // Renders the top bar and, while expanded, the menu panel under it.
    // Reports the regions both cover so the outside-click guard can
    // hit-test this frame's click.
    fn render_navbar(&mut self, ctx: &Context) -> NavbarFrame {
        let mut theme_toggle_clicked = false;

        let bar = TopBottomPanel::top("navbar")
            .show(ctx, |ui| {
                ui.add_space(2.0);
                ui.horizontal(|ui| {
                    if ui
                        .selectable_label(self.nav.is_expanded(), "☰")
                        .on_hover_text("Menu")
                        .clicked()
                    {
                        self.nav.toggle();
                    }

                    ui.heading("🚌 TransitDesk");

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let toggle = ui
                            .button(self.theme.current().icon())
                            .on_hover_text(format!("Theme: {}", self.theme.current().label()));
                        if toggle.clicked() {
                            // The guard must never treat this click as outside
                            theme_toggle_clicked = true;
                            self.theme.cycle(&mut *self.prefs);
                            ctx.set_visuals(self.theme.current().visuals());
                        }
                    });
                });
                ui.add_space(2.0);
            })
            .response
            .rect;

        let menu = if self.nav.is_expanded() {
            let rect = TopBottomPanel::top("navbar_menu")
                .show(ctx, |ui| {
                    ui.add_space(2.0);
                    for view in View::ALL {
                        if ui.selectable_label(self.view == view, view.title()).clicked() {
                            self.navigate(view);
                        }
                    }
                    ui.add_space(2.0);
                })
                .response
                .rect;
            Some(rect)
        } else {
            None
        };

        NavbarFrame {
            regions: NavRegions { bar, menu },
            theme_toggle_clicked,
        }
    }

    // Floating back control in the bottom-right corner, absent on home
    fn render_back_control(&mut self, ctx: &Context) {
        if !self.back_control_shown() {
            return;
        }

        egui::Area::new(egui::Id::new("back_control"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-18.0, -18.0))
            .show(ctx, |ui| {
                if ui.button("⬅ Back").on_hover_text("Previous view").clicked() {
                    self.go_back();
                }
            });
    }
}

impl eframe::App for DeskApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Apply theme
        ctx.set_visuals(self.theme.current().visuals());

        let navbar = self.render_navbar(ctx);

        // Collapse the menu on clicks that belong to no navigation region
        let probe = ClickProbe {
            click_pos: ctx.input(|i| {
                if i.pointer.primary_clicked() {
                    i.pointer.interact_pos()
                } else {
                    None
                }
            }),
            on_theme_toggle: navbar.theme_toggle_clicked,
        };
        if navbar::should_collapse(self.nav.is_expanded(), &probe, &navbar.regions) {
            self.nav.collapse();
        }

        // Main content panel
        CentralPanel::default().show(ctx, |ui| {
            notices::render_notices(&mut self.notices, ui);
            match self.view {
                View::Home => render_home_view(self, ui),
                View::Requests => render_requests_view(self, ui),
                View::About => render_about_view(self, ui),
            }
        });

        self.render_back_control(ctx);

        // Keep the relative timestamps fresh without a busy repaint loop
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
