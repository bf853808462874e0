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

use crate::config::ProbeConfig;
use crate::discovery::discover;
use crate::error::{ProbeError, Result};
use crate::models::JavaInstallation;
use crate::selection::select_default;

pub struct WhichCommand<'a> {
    config: &'a ProbeConfig,
}

impl<'a> WhichCommand<'a> {
    pub fn new(config: &'a ProbeConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, json: bool) -> Result<()> {
        let installations = discover();
        let selected = choose(&installations, self.config)?;

        if json {
            println!("{}", serde_json::to_string_pretty(selected)?);
        } else {
            println!("{}", selected.path.display());
        }

        Ok(())
    }
}

fn choose<'i>(
    installations: &'i [JavaInstallation],
    config: &ProbeConfig,
) -> Result<&'i JavaInstallation> {
    select_default(installations, &config.selection).ok_or(ProbeError::NoInstallation)
}
