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
use chrono::{DateTime, Local};
use eframe::egui::{Align, Color32, CornerRadius, Frame, Layout, Margin, RichText, Ui};
use log::debug;
use paste::paste;
use uuid::Uuid;

// local
use crate::define_notice_helpers;


// Severity of a notice banner, drives its colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,    // Neutral announcements
    Success, // An action went through
    Warning, // Something needs attention but nothing failed
    Error,   // An action was rejected
}

impl NoticeLevel {
    // Banner background for this level
    pub fn fill(self) -> Color32 {
        match self {
            NoticeLevel::Info => Color32::from_rgb(62, 142, 208),
            NoticeLevel::Success => Color32::from_rgb(72, 199, 142),
            NoticeLevel::Warning => Color32::from_rgb(255, 224, 138),
            NoticeLevel::Error => Color32::from_rgb(241, 70, 104),
        }
    }

    // Text color readable on fill()
    pub fn text_color(self) -> Color32 {
        match self {
            NoticeLevel::Warning => Color32::from_rgb(84, 64, 0),
            _ => Color32::WHITE,
        }
    }
}

/// A single dismissible banner.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Identifier the dismiss control uses to find this notice.
    pub id: Uuid,

    /// Severity of the banner.
    pub level: NoticeLevel,

    /// Message shown to the user.
    pub text: String,

    /// When the notice was pushed.
    pub created: DateTime<Local>,
}

/// Ordered collection of the notices currently on screen.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notice and returns its id.
    pub fn push(&mut self, level: NoticeLevel, text: impl Into<String>) -> Uuid {
        let notice = Notice {
            id: Uuid::new_v4(),
            level,
            text: text.into(),
            created: Local::now(),
        };
        let id = notice.id;
        debug!("{:?} notice: {}", notice.level, notice.text);
        self.notices.push(notice);
        id
    }

    /// Removes the notice with `id`. Siblings keep their order, and a
    /// second dismissal of the same id finds nothing to remove.
    pub fn dismiss(&mut self, id: Uuid) {
        self.notices.retain(|notice| notice.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

define_notice_helpers!(
    (Info, info),
    (Success, success),
    (Warning, warning),
    (Error, error)
);

/// Renders the banner stack with one dismiss control per notice.
pub fn render_notices(board: &mut NoticeBoard, ui: &mut Ui) {
    let mut dismissed: Option<Uuid> = None;

    for notice in board.iter() {
        Frame::default()
            .fill(notice.level.fill())
            .corner_radius(CornerRadius::same(4))
            .inner_margin(Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&notice.text).color(notice.level.text_color()));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                            dismissed = Some(notice.id);
                        }
                    });
                });
            });
        ui.add_space(4.0);
    }

    if let Some(id) = dismissed {
        board.dismiss(id);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_arrival_order() {
        let mut board = NoticeBoard::new();
        board.push_info("first");
        board.push_success("second");
        board.push_error("third");

        let texts: Vec<&str> = board.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn dismiss_removes_exactly_one_notice() {
        let mut board = NoticeBoard::new();
        board.push_info("first");
        let middle = board.push_warning("second");
        board.push_error("third");

        board.dismiss(middle);

        let texts: Vec<&str> = board.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["first", "third"]);
    }

    #[test]
    fn dismissing_the_same_id_twice_is_a_noop() {
        let mut board = NoticeBoard::new();
        let first = board.push_info("first");
        board.push_info("second");

        board.dismiss(first);
        assert_eq!(board.len(), 1);

        board.dismiss(first);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn dismissing_an_unknown_id_is_a_noop() {
        let mut board = NoticeBoard::new();
        board.push_info("only");

        board.dismiss(Uuid::new_v4());
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn helpers_set_the_matching_level() {
        let mut board = NoticeBoard::new();
        board.push_info("a");
        board.push_success("b");
        board.push_warning("c");
        board.push_error("d");

        let levels: Vec<NoticeLevel> = board.iter().map(|n| n.level).collect();
        assert_eq!(
            levels,
            [
                NoticeLevel::Info,
                NoticeLevel::Success,
                NoticeLevel::Warning,
                NoticeLevel::Error
            ]
        );
    }

    #[test]
    fn warning_text_stays_readable_on_its_fill() {
        // Light fill gets dark text, every other level gets white
        assert_ne!(NoticeLevel::Warning.text_color(), Color32::WHITE);
        assert_eq!(NoticeLevel::Error.text_color(), Color32::WHITE);
    }
}
