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

use crate::config::SelectionConfig;
use crate::models::JavaInstallation;

/// Pick the installation a launcher should use by default.
///
/// In order of preference:
/// 1. a recommended installation with the preferred architecture
/// 2. a Development Kit with the preferred architecture, when
///    `prefer_development_kit` is set
/// 3. any installation with the preferred architecture
/// 4. any recommended installation
/// 5. the first installation
///
/// With no architecture preference every installation matches. Returns
/// `None` only for an empty slice.
pub fn select_default<'a>(
    installations: &'a [JavaInstallation],
    prefs: &SelectionConfig,
) -> Option<&'a JavaInstallation> {
    let preferred_arch = |java: &&JavaInstallation| {
        prefs
            .architecture
            .is_none_or(|arch| java.architecture == arch)
    };

    installations
        .iter()
        .filter(preferred_arch)
        .find(|java| java.recommended)
        .or_else(|| {
            prefs
                .prefer_development_kit
                .then(|| {
                    installations
                        .iter()
                        .filter(preferred_arch)
                        .find(|java| java.is_development_kit())
                })
                .flatten()
        })
        .or_else(|| installations.iter().find(preferred_arch))
        .or_else(|| installations.iter().find(|java| java.recommended))
        .or_else(|| installations.first())
}
