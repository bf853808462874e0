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

//! Java discovery through the JavaSoft registry keys.
//!
//! Java installers record each installed version as a subkey of
//! `HKEY_LOCAL_MACHINE\SOFTWARE\JavaSoft\<product>`, with the install
//! location in the subkey's `JavaHome` value. The product key itself carries
//! a `CurrentVersion` value naming the subkey of the default version.
//!
//! The walk is written against [`RegistryHive`] and [`RegistryKey`] so the
//! same code runs against the real registry on Windows and against an
//! in-memory fixture in tests.

use crate::discovery::JavaProber;
use crate::error::{ProbeError, Result};
use crate::models::{Architecture, JavaInstallation, JavaKind};
use crate::platform::java_binary_subpath;
use log::debug;
use std::fmt;
use std::io;
use std::path::PathBuf;

pub const JRE_ROOT: &str = "SOFTWARE\\JavaSoft\\Java Runtime Environment";
pub const JDK_ROOT: &str = "SOFTWARE\\JavaSoft\\Java Development Kit";

pub const CURRENT_VERSION_VALUE: &str = "CurrentVersion";
pub const JAVA_HOME_VALUE: &str = "JavaHome";

/// Registry namespace to read from on 64-bit Windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryView {
    Bits64,
    Bits32,
}

impl RegistryView {
    pub fn architecture(self) -> Architecture {
        match self {
            RegistryView::Bits64 => Architecture::Bits64,
            RegistryView::Bits32 => Architecture::Bits32,
        }
    }
}

impl fmt::Display for RegistryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.architecture())
    }
}

impl JavaKind {
    /// Product key the installer registers this kind under.
    pub fn registry_root(self) -> &'static str {
        match self {
            JavaKind::Runtime => JRE_ROOT,
            JavaKind::DevelopmentKit => JDK_ROOT,
        }
    }
}

/// Order in which the product keys are scanned; results are concatenated in
/// this order.
pub const SCAN_ORDER: [(RegistryView, JavaKind); 4] = [
    (RegistryView::Bits64, JavaKind::Runtime),
    (RegistryView::Bits64, JavaKind::DevelopmentKit),
    (RegistryView::Bits32, JavaKind::Runtime),
    (RegistryView::Bits32, JavaKind::DevelopmentKit),
];

/// An open registry key.
///
/// Implementations release the underlying handle when dropped.
pub trait RegistryKey: Sized {
    fn string_value(&self, name: &str) -> io::Result<String>;

    fn subkey_count(&self) -> io::Result<usize>;

    /// Names of the first `count` subkeys in enumeration order.
    fn subkey_names(&self, count: usize) -> Vec<io::Result<String>>;

    fn open_subkey(&self, name: &str) -> io::Result<Self>;
}

/// Entry point into `HKEY_LOCAL_MACHINE`.
pub trait RegistryHive {
    type Key: RegistryKey;

    fn open(&self, view: RegistryView, path: &str) -> io::Result<Self::Key>;
}

pub struct RegistryProber<H: RegistryHive> {
    hive: H,
}

impl<H: RegistryHive> RegistryProber<H> {
    pub fn new(hive: H) -> Self {
        Self { hive }
    }

    /// Collect every installation registered under one product key.
    ///
    /// Only failures to open the product key or to count its subkeys are
    /// reported; a single unreadable version subkey is skipped.
    pub fn scan_root(&self, view: RegistryView, kind: JavaKind) -> Result<Vec<JavaInstallation>> {
        let root = kind.registry_root();
        let registry_error = |source: io::Error| ProbeError::Registry {
            view: view.to_string(),
            root: root.to_string(),
            source,
        };

        let root_key = self.hive.open(view, root).map_err(registry_error)?;

        let current_version = match root_key.string_value(CURRENT_VERSION_VALUE) {
            Ok(version) => Some(version),
            Err(e) => {
                debug!("No {CURRENT_VERSION_VALUE} under {root} ({view}-bit view): {e}");
                None
            }
        };

        let count = root_key.subkey_count().map_err(registry_error)?;
        debug!("{root} ({view}-bit view) has {count} subkey(s)");

        let mut installations = Vec::new();
        for name in root_key.subkey_names(count) {
            let name = match name {
                Ok(name) if !name.is_empty() => name,
                Ok(_) => continue,
                Err(e) => {
                    debug!("Skipping unreadable subkey of {root}: {e}");
                    continue;
                }
            };

            let java_home = match root_key
                .open_subkey(&name)
                .and_then(|version_key| version_key.string_value(JAVA_HOME_VALUE))
            {
                Ok(home) => home,
                Err(e) => {
                    debug!("No {JAVA_HOME_VALUE} for {root}\\{name}: {e}");
                    continue;
                }
            };

            let recommended = current_version.as_deref() == Some(name.as_str());
            let path = PathBuf::from(java_home).join(java_binary_subpath());
            installations.push(JavaInstallation::new(
                name,
                view.architecture(),
                path,
                recommended,
                Some(kind),
            ));
        }

        Ok(installations)
    }
}

impl<H: RegistryHive> JavaProber for RegistryProber<H> {
    fn platform(&self) -> &str {
        "Windows registry"
    }

    fn probe(&self) -> Vec<JavaInstallation> {
        let mut installations = Vec::new();
        for (view, kind) in SCAN_ORDER {
            match self.scan_root(view, kind) {
                Ok(found) => installations.extend(found),
                Err(e) => debug!("{e}"),
            }
        }
        installations
    }
}
