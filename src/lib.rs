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

//! TransitDesk is the desktop companion app for a transport service aimed
//! at institutions and companies: browse the offer, cycle the visual
//! theme, and submit transport requests from one window.
//!
//! The crate is organized around small explicit state machines (theme,
//! navigation menu, notice board, tab strip) owned by [`app::DeskApp`] and
//! rendered with eframe. They are exposed through this library interface
//! so the integration tests can drive them without a window.

pub mod app;
pub mod theme;
pub mod tabs;
pub mod navbar;
pub mod notices;
pub mod request;
pub mod prefs;
pub mod helper;

#[macro_use]
pub mod macros;

// Re-exports for the binary and the integration tests
pub use app::{DeskApp, View};
pub use navbar::{ClickProbe, NavMenu, NavRegions};
pub use notices::{Notice, NoticeBoard, NoticeLevel};
pub use prefs::{FilePrefStore, MemoryPrefStore, PrefStore};
pub use request::{RequestForm, RideRequest};
pub use tabs::{Pane, TabItem, TabStrip};
pub use theme::{Theme, ThemeController};
