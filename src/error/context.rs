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

use crate::error::ProbeError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a ProbeError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a ProbeError) -> Self {
        let (suggestion, details) = match error {
            ProbeError::ConfigError(msg) => {
                let suggestion = Some(
                    "Check the syntax of config.toml in JAVAPROBE_HOME (default ~/.javaprobe) or \
                     remove it to use the defaults."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            ProbeError::InvalidConfig(msg) => {
                let suggestion = Some(
                    "Valid values for selection.architecture are \"32\" and \"64\".".to_string(),
                );
                let details = Some(format!("Invalid setting: {msg}"));
                (suggestion, details)
            }
            ProbeError::NoInstallation => {
                let suggestion = Some(
                    "Install a Java runtime and make sure 'java' is available on PATH.".to_string(),
                );
                let details = None;
                (suggestion, details)
            }
            ProbeError::PermissionDenied(path) => {
                let suggestion = if cfg!(unix) {
                    Some(format!("Ensure you have read permissions to: {path}"))
                } else {
                    Some(format!(
                        "Run as Administrator or ensure you have read permissions to: {path}"
                    ))
                };
                let details = None;
                (suggestion, details)
            }
            ProbeError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        if cfg!(unix) {
                            Some("Check file permissions.".to_string())
                        } else {
                            Some("Run as Administrator or check file permissions.".to_string())
                        }
                    }
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
            ProbeError::Registry { .. } | ProbeError::Json(_) => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
