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

//! Discovery of Java installations on the host.
//!
//! Each supported platform provides a [`JavaProber`]. [`discover`] picks the
//! prober for the build target and applies the shared fallback: when the
//! platform is unsupported or nothing is found, the result is a single
//! generic `java` candidate. Discovery never fails.

pub mod registry;
#[cfg(windows)]
pub mod windows;

use crate::models::JavaInstallation;
use log::{info, warn};

/// Platform-specific source of Java installations.
pub trait JavaProber {
    /// Name of the source, used in diagnostics.
    fn platform(&self) -> &str;

    /// Whether this platform has any probing implemented.
    fn is_supported(&self) -> bool {
        true
    }

    /// Installations in the platform's enumeration order. Must not fail;
    /// problems are logged and skipped.
    fn probe(&self) -> Vec<JavaInstallation>;
}

/// Prober for platforms without specialized detection.
pub struct UnsupportedProber {
    platform: String,
}

impl UnsupportedProber {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
        }
    }
}

impl JavaProber for UnsupportedProber {
    fn platform(&self) -> &str {
        &self.platform
    }

    fn is_supported(&self) -> bool {
        false
    }

    fn probe(&self) -> Vec<JavaInstallation> {
        Vec::new()
    }
}

/// Prober for the platform this binary was built for.
pub fn platform_prober() -> Box<dyn JavaProber> {
    #[cfg(windows)]
    return Box::new(registry::RegistryProber::new(windows::WindowsHive));

    #[cfg(not(windows))]
    return Box::new(UnsupportedProber::new(
        crate::platform::platform_description(),
    ));
}

/// Discover Java installations on this host.
///
/// The result is never empty.
pub fn discover() -> Vec<JavaInstallation> {
    let prober = platform_prober();
    discover_with(prober.as_ref())
}

/// Run `prober` and apply the fallback rules.
pub fn discover_with(prober: &dyn JavaProber) -> Vec<JavaInstallation> {
    if !prober.is_supported() {
        info!(
            "{} Java detection is not implemented - defaulting to \"java\"",
            prober.platform()
        );
        return fallback();
    }

    let installations = prober.probe();
    if installations.is_empty() {
        warn!(
            "Failed to find Java in the {} - defaulting to \"java\"",
            prober.platform()
        );
        return fallback();
    }

    info!("Found the following Java installations (64 -> 32, JRE -> JDK):");
    for java in &installations {
        info!("  {java}");
    }

    installations
}

/// The single-element result used when nothing better is known.
pub fn fallback() -> Vec<JavaInstallation> {
    vec![JavaInstallation::fallback()]
}
