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


use chrono::{DateTime, Local};
use simplelog::*;

use std::fs::OpenOptions;
use std::path::Path;


/// Initializes logging to a file, falling back to stderr when the file
/// cannot be opened.
pub fn init_logging(log_file_path: &Path) {
    if let Some(parent) = log_file_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let config = ConfigBuilder::new()
        .set_max_level(LevelFilter::Off)
        .add_filter_allow_str("transit_desk")
        .build();

    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(true)
        .open(log_file_path);

    let initialized = match log_file {
        Ok(file) => WriteLogger::init(LevelFilter::Debug, config.clone(), file).is_ok(),
        Err(_) => false,
    };

    if !initialized {
        let _ = SimpleLogger::init(LevelFilter::Debug, config);
    }
}

/// Converts elapsed time since `time` to a human readable format.
pub fn time_ago(time: DateTime<Local>) -> String {
    let elapsed = Local::now().signed_duration_since(time);
    let secs = elapsed.num_seconds().max(0);
    if secs < 60 {
        format!("{} seconds ago", secs)
    } else if secs < 3600 {
        format!("{} minutes ago", secs / 60)
    } else if secs < 86400 {
        format!("{} hours ago", secs / 3600)
    } else {
        format!("{} days ago", secs / 86400)
    }
}
