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
use eframe::{self, App, NativeOptions};
use log::info;

// Standard library
use std::path::PathBuf;

// local
use transit_desk::app::{DeskApp, VERSION};
use transit_desk::helper::init_logging;
use transit_desk::prefs;


fn main() -> Result<(), eframe::Error> {
    // Initialize logging
    let log_path = prefs::default_data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("transit-desk.log");
    init_logging(&log_path);

    info!("starting TransitDesk v{}", VERSION);

    // Preference storage, the theme restore happens inside DeskApp::new
    let store = prefs::open_default_store();

    // Window options
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 620.0])
            .with_min_inner_size([620.0, 420.0]),
        ..Default::default()
    };

    // Run native eframe app
    eframe::run_native(
        "TransitDesk",
        options,
        Box::new(move |_cc| Ok(Box::new(DeskApp::new(store)) as Box<dyn App>)),
    )
}
