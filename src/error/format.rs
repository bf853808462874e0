// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{ErrorContext, ProbeError};
use colored::{ColoredString, Colorize};

pub fn format_error_chain(error: &ProbeError) -> String {
    ErrorContext::new(error).to_string()
}

fn paint(text: &str, use_color: bool, style: fn(ColoredString) -> ColoredString) -> String {
    if use_color {
        style(text.into()).to_string()
    } else {
        text.to_string()
    }
}

/// Terminal rendering of an error: a header line, the details, and one
/// bullet per suggestion line.
pub fn format_error_with_color(error: &ProbeError, use_color: bool) -> String {
    let context = ErrorContext::new(error);
    let mut lines = vec![format!(
        "{} {error}",
        paint("Error:", use_color, |s| s.red().bold())
    )];

    if let Some(details) = &context.details {
        lines.push(String::new());
        lines.push(paint(details, use_color, |s| s.dimmed()));
    }

    if let Some(suggestion) = &context.suggestion {
        lines.push(String::new());
        lines.push(paint("Suggestions:", use_color, |s| s.yellow().bold()));
        lines.extend(
            suggestion
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| paint(&format!("• {line}"), use_color, |s| s.cyan())),
        );
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
