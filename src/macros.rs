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

use paste::paste;

/// ---------------------- Notice helper macro ----------------------
/// Generates one push helper on NoticeBoard per notice level
#[macro_export]
macro_rules! define_notice_helpers {
    ($(($level:ident, $name:ident)),+ $(,)?) => {
        paste! {
            impl NoticeBoard {
                $(
                    /// Pushes a notice at the corresponding level and
                    /// returns its id.
                    pub fn [<push_ $name>](&mut self, text: impl Into<String>) -> Uuid {
                        self.push(NoticeLevel::$level, text)
                    }
                )+
            }
        }
    };
}
