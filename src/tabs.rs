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


// installed
use eframe::egui::{
    self,
    Align, CornerRadius, Frame, Layout, Margin, ScrollArea,
};

// local
use crate::app::{DeskApp, View, VERSION};
use crate::helper::time_ago;


/// A content pane the tab strip can activate.
#[derive(Debug, Clone)]
pub struct Pane {
    /// Identifier tabs reference through their target.
    pub id: String,

    /// Heading shown at the top of the pane.
    pub title: String,

    /// Body rendered as a bullet list.
    pub lines: Vec<String>,
}

/// One entry in the tab strip.
#[derive(Debug, Clone)]
pub struct TabItem {
    /// Label shown on the tab.
    pub label: String,

    /// Id of the pane this tab activates. Tabs without a target are
    /// shown but ignore clicks.
    pub target: Option<String>,
}

/// Click-driven switcher: a row of tabs over a set of panes, with a
/// single active tab at a time.
#[derive(Debug, Clone)]
pub struct TabStrip {
    items: Vec<TabItem>,
    panes: Vec<Pane>,
    active: usize, // Index into items
}

impl TabStrip {
    pub fn new(items: Vec<TabItem>, panes: Vec<Pane>) -> Self {
        Self {
            items,
            panes,
            active: 0,
        }
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Makes the tab at `index` the active one. Out-of-range indices and
    /// tabs without a target leave the strip untouched, and selecting
    /// the active tab again reproduces the same state.
    pub fn select(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };

        if item.target.is_none() {
            return;
        }

        self.active = index;
    }

    /// The pane referenced by the active tab, when it exists. A target
    /// naming no pane yields an active tab with no pane.
    pub fn active_pane(&self) -> Option<&Pane> {
        let target = self.items.get(self.active)?.target.as_deref()?;
        self.panes.iter().find(|pane| pane.id == target)
    }
}

/// Audience switcher shown on the home view.
pub fn home_tabs() -> TabStrip {
    let items = vec![
        TabItem {
            label: "🏫 Institutions".to_string(),
            target: Some("institutions".to_string()),
        },
        TabItem {
            label: "🏢 Companies".to_string(),
            target: Some("companies".to_string()),
        },
        TabItem {
            label: "👤 Individuals".to_string(),
            target: None,
        },
    ];

    let panes = vec![
        Pane {
            id: "institutions".to_string(),
            title: "Transport for schools and universities".to_string(),
            lines: vec![
                "Scheduled routes for the whole academic year".to_string(),
                "Accessible vehicles available on every route".to_string(),
                "One coordinator handles your whole fleet".to_string(),
                "Boarding lists shared with your administration".to_string(),
            ],
        },
        Pane {
            id: "companies".to_string(),
            title: "Transport for companies".to_string(),
            lines: vec![
                "Daily shuttles between sites and transport hubs".to_string(),
                "One-off services for events and off-sites".to_string(),
                "Monthly invoicing with per-cost-center reports".to_string(),
            ],
        },
    ];

    TabStrip::new(items, panes)
}

/// Renders the home view: hero, audience tabs, and the active pane.
pub fn render_home_view(app: &mut DeskApp, ui: &mut egui::Ui) {
    ui.add_space(10.0);
    ui.heading("Reliable transport for your organization");
    ui.label("Request, track and manage rides for your people from one place.");
    ui.add_space(5.0);
    if ui.button("📝 Request a ride").clicked() {
        app.navigate(View::Requests);
    }

    ui.add_space(15.0);
    ui.separator();

    // Audience tabs
    ui.horizontal(|ui| {
        let mut clicked: Option<usize> = None;
        for (i, item) in app.home_tabs.items().iter().enumerate() {
            let mut response = ui.selectable_label(app.home_tabs.is_active(i), &item.label);
            if item.target.is_none() {
                response = response.on_hover_text("Coming soon");
            }
            if response.clicked() {
                clicked = Some(i);
            }
        }
        if let Some(i) = clicked {
            app.home_tabs.select(i);
        }
    });

    ui.add_space(5.0);
    if let Some(pane) = app.home_tabs.active_pane() {
        Frame::default()
            .fill(ui.visuals().faint_bg_color)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.strong(&pane.title);
                ui.add_space(4.0);
                for line in &pane.lines {
                    ui.label(format!("• {}", line));
                }
            });
    }
}

/// Renders the requests view: draft form plus the list of requests
/// submitted in this session.
pub fn render_requests_view(app: &mut DeskApp, ui: &mut egui::Ui) {
    ui.add_space(10.0);
    ui.heading("📝 Request transport");
    ui.label("Tell us who travels and where. An operator confirms by email.");
    ui.add_space(10.0);

    // Draft form
    egui::Grid::new("request_form")
        .num_columns(2)
        .spacing([10.0, 6.0])
        .show(ui, |ui| {
            ui.label("Passenger");
            ui.add(
                egui::TextEdit::singleline(&mut app.request_form.passenger)
                    .hint_text("Full name")
                    .desired_width(280.0),
            );
            ui.end_row();

            ui.label("Phone");
            ui.add(
                egui::TextEdit::singleline(&mut app.request_form.phone)
                    .hint_text("Contact number")
                    .desired_width(280.0),
            );
            ui.end_row();

            ui.label("Email");
            ui.add(
                egui::TextEdit::singleline(&mut app.request_form.email)
                    .hint_text("name@example.com")
                    .desired_width(280.0),
            );
            ui.end_row();

            ui.label("Pickup");
            ui.add(
                egui::TextEdit::singleline(&mut app.request_form.pickup)
                    .hint_text("Street, number, city")
                    .desired_width(280.0),
            );
            ui.end_row();

            ui.label("Destination");
            ui.add(
                egui::TextEdit::singleline(&mut app.request_form.destination)
                    .hint_text("Street, number, city")
                    .desired_width(280.0),
            );
            ui.end_row();

            ui.label("Notes");
            ui.add(
                egui::TextEdit::multiline(&mut app.request_form.notes)
                    .hint_text("Schedules, accessibility needs, ...")
                    .desired_width(280.0)
                    .desired_rows(3),
            );
            ui.end_row();
        });

    ui.add_space(6.0);
    if ui.button("🚌 Submit request").clicked() {
        app.submit_request();
    }

    ui.add_space(10.0);
    ui.separator();
    ui.label("📑 Requests this session:");
    ui.add_space(5.0);

    if app.requests.is_empty() {
        ui.label("Nothing submitted yet.");
    } else {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            for request in &app.requests {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(format!("Passenger: {}", request.passenger));
                            ui.label(format!("From: {}", request.pickup));
                            ui.label(format!("To: {}", request.destination));
                            if !request.notes.is_empty() {
                                ui.label(format!("Notes: {}", request.notes));
                            }
                        });

                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(time_ago(request.submitted))
                                .on_hover_text(request.submitted.format("%Y-%m-%d %H:%M").to_string());
                        });
                    });
                });
                ui.add_space(5.0);
            }
        });
    }

    // Footer
    egui::TopBottomPanel::bottom("requests_bottom_panel").show(ui.ctx(), |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("TransitDesk v{}", VERSION));
            ui.separator();
            ui.label(format!("Requests this session: {}", app.requests.len()));
        });
    });
}

/// Renders the about view.
pub fn render_about_view(app: &mut DeskApp, ui: &mut egui::Ui) {
    ui.add_space(10.0);
    ui.heading("ℹ About TransitDesk");
    ui.add_space(5.0);
    ui.label("TransitDesk is the desktop companion for our transport service for institutions and companies.");
    ui.label("Browse the offer on the home view, then submit a transport request with your details.");
    ui.add_space(10.0);
    ui.group(|ui| {
        ui.label(format!("Version: {}", VERSION));
        ui.label(format!("Active theme: {}", app.theme.current().label()));
        ui.label("Support: support@transitdesk.example");
    });
}
