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
use crate::models::Architecture;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const HOME_ENV_VAR: &str = "JAVAPROBE_HOME";
const DEFAULT_HOME_DIR: &str = ".javaprobe";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ProbeConfig {
    #[serde(default)]
    pub selection: SelectionConfig,
}

/// Preferences applied when choosing a default installation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SelectionConfig {
    #[serde(default)]
    pub architecture: Option<Architecture>,

    #[serde(default = "default_prefer_development_kit")]
    pub prefer_development_kit: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            architecture: None,
            prefer_development_kit: default_prefer_development_kit(),
        }
    }
}

fn default_prefer_development_kit() -> bool {
    true
}

/// Directory holding `config.toml`: `$JAVAPROBE_HOME`, else `~/.javaprobe`.
pub fn probe_home() -> Result<PathBuf> {
    if let Some(home) = env::var_os(HOME_ENV_VAR).filter(|home| !home.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir()
        .map(|home| home.join(DEFAULT_HOME_DIR))
        .ok_or_else(|| {
            ProbeError::ConfigError(format!(
                "Unable to determine home directory; set {HOME_ENV_VAR}"
            ))
        })
}

impl ProbeConfig {
    pub fn load(probe_home: &Path) -> Result<Self> {
        let config_path = probe_home.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path).map_err(|e| match e.kind() {
            io::ErrorKind::PermissionDenied => {
                ProbeError::PermissionDenied(config_path.display().to_string())
            }
            _ => ProbeError::Io(e),
        })?;
        let config: ProbeConfig = toml::from_str(&contents)
            .map_err(|e| ProbeError::ConfigError(format!("Failed to parse config.toml: {e}")))?;
        config.validate()?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.selection.architecture == Some(Architecture::Unknown) {
            return Err(ProbeError::InvalidConfig(
                "selection.architecture cannot be \"unknown\"".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ProbeConfig::default();
        assert_eq!(config.selection.architecture, None);
        assert!(config.selection.prefer_development_kit);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = ProbeConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, ProbeConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[selection]\narchitecture = \"32\"\nprefer_development_kit = false\n",
        )
        .unwrap();

        let loaded = ProbeConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.selection.architecture, Some(Architecture::Bits32));
        assert!(!loaded.selection.prefer_development_kit);
    }

    #[test]
    fn test_architecture_alias_in_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[selection]\narchitecture = \"x64\"\n",
        )
        .unwrap();

        let loaded = ProbeConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.selection.architecture, Some(Architecture::Bits64));
    }

    #[test]
    fn test_unrecognized_architecture_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[selection]\narchitecture = \"sparc\"\n",
        )
        .unwrap();

        match ProbeConfig::load(temp_dir.path()) {
            Err(ProbeError::ConfigError(msg)) => assert!(msg.contains("sparc")),
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        fs::write(
            &config_path,
            r#"
[selection]
architecture = "64"
"#,
        )
        .unwrap();

        let loaded = ProbeConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.selection.architecture, Some(Architecture::Bits64));
        assert!(loaded.selection.prefer_development_kit);
    }

    #[test]
    fn test_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "[selection\n").unwrap();

        match ProbeConfig::load(temp_dir.path()) {
            Err(ProbeError::ConfigError(msg)) => assert!(msg.contains("config.toml")),
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_architecture_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[selection]\narchitecture = \"unknown\"\n",
        )
        .unwrap();

        assert!(matches!(
            ProbeConfig::load(temp_dir.path()),
            Err(ProbeError::InvalidConfig(_))
        ));
    }

    #[test]
    #[serial]
    fn test_probe_home_from_env() {
        let temp_dir = TempDir::new().unwrap();
        unsafe {
            env::set_var(HOME_ENV_VAR, temp_dir.path());
        }
        let home = probe_home();
        unsafe {
            env::remove_var(HOME_ENV_VAR);
        }
        assert_eq!(home.unwrap(), temp_dir.path());
    }

    #[test]
    #[serial]
    fn test_probe_home_default() {
        unsafe {
            env::remove_var(HOME_ENV_VAR);
        }
        if let Ok(home) = probe_home() {
            assert!(home.ends_with(DEFAULT_HOME_DIR));
        }
    }
}
