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
use crate::error::Result;
use crate::models::JavaInstallation;
use crate::selection::select_default;
use colored::Colorize;
use comfy_table::{Cell, Table};
use log::debug;
use serde::Serialize;

#[derive(Serialize)]
struct ListEntry<'a> {
    #[serde(flatten)]
    installation: &'a JavaInstallation,
    default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
}

pub struct ListCommand<'a> {
    config: &'a ProbeConfig,
}

impl<'a> ListCommand<'a> {
    pub fn new(config: &'a ProbeConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, json: bool, check: bool) -> Result<()> {
        let installations = discover();
        debug!("Discovered {} Java installation(s)", installations.len());

        let output = if json {
            render_json(&installations, self.config, check)?
        } else {
            render_table(&installations, self.config, check)
        };
        println!("{output}");

        Ok(())
    }
}

fn entries<'a>(
    installations: &'a [JavaInstallation],
    config: &ProbeConfig,
    check: bool,
) -> Vec<ListEntry<'a>> {
    let selected = select_default(installations, &config.selection);
    installations
        .iter()
        .map(|installation| ListEntry {
            installation,
            default: selected.is_some_and(|default| std::ptr::eq(default, installation)),
            exists: check.then(|| installation.executable_exists()),
        })
        .collect()
}

fn render_json(
    installations: &[JavaInstallation],
    config: &ProbeConfig,
    check: bool,
) -> Result<String> {
    Ok(serde_json::to_string_pretty(&entries(
        installations,
        config,
        check,
    ))?)
}

fn render_table(installations: &[JavaInstallation], config: &ProbeConfig, check: bool) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);

    let mut headers = vec![
        Cell::new(""),
        Cell::new("ID"),
        Cell::new("Arch"),
        Cell::new("Kind"),
        Cell::new("Recommended"),
        Cell::new("Path"),
    ];
    if check {
        headers.push(Cell::new("Exists"));
    }
    table.set_header(headers);

    for entry in entries(installations, config, check) {
        let java = entry.installation;
        let mut row = vec![
            Cell::new(if entry.default { "*" } else { "" }),
            Cell::new(&java.id),
            Cell::new(java.architecture.to_string()),
            Cell::new(java.kind.map(|kind| kind.to_string()).unwrap_or_default()),
            Cell::new(if java.recommended { "yes" } else { "" }),
            Cell::new(java.path.display().to_string()),
        ];
        if let Some(exists) = entry.exists {
            let mark = if exists {
                "✓".green().to_string()
            } else {
                "✗".red().to_string()
            };
            row.push(Cell::new(mark));
        }
        table.add_row(row);
    }

    table.to_string()
}
