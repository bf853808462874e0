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

use crate::error::{ProbeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Identifier and command used when no installation could be discovered.
pub const FALLBACK_JAVA: &str = "java";

/// Processor word width a Java installation targets.
///
/// Serialized as `"unknown"`, `"32"` or `"64"`. Deserialization also accepts
/// the usual aliases (`x64`, `amd64`, `x86`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Architecture {
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "32")]
    Bits32,
    #[serde(rename = "64")]
    Bits64,
}

impl FromStr for Architecture {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(Architecture::Unknown),
            "32" | "x86" | "i386" | "i686" => Ok(Architecture::Bits32),
            "64" | "x64" | "amd64" | "x86_64" => Ok(Architecture::Bits64),
            _ => Err(ProbeError::InvalidConfig(format!(
                "Unknown architecture: {s}"
            ))),
        }
    }
}

impl TryFrom<String> for Architecture {
    type Error = ProbeError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arch = match self {
            Architecture::Unknown => "unknown",
            Architecture::Bits32 => "32",
            Architecture::Bits64 => "64",
        };
        write!(f, "{arch}")
    }
}

/// Flavor of a Java distribution as recorded by the installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JavaKind {
    #[serde(rename = "jre")]
    Runtime,
    #[serde(rename = "jdk")]
    DevelopmentKit,
}

impl fmt::Display for JavaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaKind::Runtime => write!(f, "jre"),
            JavaKind::DevelopmentKit => write!(f, "jdk"),
        }
    }
}

/// A discovered Java installation.
///
/// Values are produced fresh on every discovery run and are never mutated
/// afterwards. `path` is built from the installation's home directory and is
/// not checked for existence; see [`JavaInstallation::executable_exists`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaInstallation {
    pub id: String,
    pub architecture: Architecture,
    pub path: PathBuf,
    pub recommended: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<JavaKind>,
}

impl JavaInstallation {
    pub fn new(
        id: String,
        architecture: Architecture,
        path: PathBuf,
        recommended: bool,
        kind: Option<JavaKind>,
    ) -> Self {
        debug_assert!(!id.is_empty(), "installation id must not be empty");
        Self {
            id,
            architecture,
            path,
            recommended,
            kind,
        }
    }

    /// The generic candidate: run whatever `java` resolves to on `PATH`.
    pub fn fallback() -> Self {
        Self::new(
            FALLBACK_JAVA.to_string(),
            Architecture::Unknown,
            PathBuf::from(FALLBACK_JAVA),
            false,
            None,
        )
    }

    pub fn is_development_kit(&self) -> bool {
        self.kind == Some(JavaKind::DevelopmentKit)
    }

    /// Whether the executable can actually be run from here.
    ///
    /// Bare command names (such as the fallback's `java`) are resolved
    /// against `PATH`.
    pub fn executable_exists(&self) -> bool {
        if self.path.components().count() == 1 && !self.path.is_absolute() {
            return which::which(&self.path).is_ok();
        }
        self.path.is_file()
    }
}

impl fmt::Display for JavaInstallation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) at {}",
            self.id,
            self.architecture,
            self.path.display()
        )?;
        if self.recommended {
            write!(f, " (Recommended)")?;
        }
        Ok(())
    }
}
