// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What to do when a `commit-msg` hook exists that was not generated by us.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HookOverwrite {
    /// Ask before replacing it
    #[default]
    Prompt,
    /// Replace it without asking
    Always,
    /// Leave it alone and carry on
    Never,
}

impl std::fmt::Display for HookOverwrite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prompt => write!(f, "prompt"),
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// State file name inside the git directory
    #[serde(default = "default_state_file")]
    pub state_file: String,

    #[serde(default)]
    pub hook_overwrite: HookOverwrite,

    /// Command the generated hook runs to fetch prefixes
    #[serde(default = "default_executable")]
    pub executable: String,
}

fn default_state_file() -> String {
    "CommitPrefix.JSON".into()
}
fn default_executable() -> String {
    "commitprefix".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            hook_overwrite: HookOverwrite::default(),
            executable: default_executable(),
        }
    }
}

impl Config {
    /// Load with priority: ENV > user config > project config > defaults
    pub fn load(work_dir: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.commitprefix.toml in repo root)
        let project_config = work_dir.join(".commitprefix.toml");
        if project_config.exists() {
            figment = figment.merge(Toml::file(&project_config));
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (COMMITPREFIX_STATE_FILE, COMMITPREFIX_HOOK_OVERWRITE, ...)
        figment = figment.merge(Env::prefixed("COMMITPREFIX_").ignore(&["log"]));

        let config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "commitprefix").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.state_file.trim().is_empty() {
            return Err(Error::Config("state_file cannot be empty".into()));
        }

        if self.state_file.contains(['/', '\\']) || self.state_file == "." || self.state_file == ".."
        {
            return Err(Error::Config(format!(
                "state_file must be a plain file name, got '{}'",
                self.state_file
            )));
        }

        if self.executable.is_empty() || self.executable.contains(char::is_whitespace) {
            return Err(Error::Config(format!(
                "executable must be a single command without spaces, got '{}'",
                self.executable
            )));
        }

        Ok(())
    }
}
