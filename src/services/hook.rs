// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use dialoguer::Confirm;
use tracing::{debug, warn};

use crate::config::HookOverwrite;
use crate::error::{Error, Result};
use crate::services::git::Shell;

pub const HOOK_NAME: &str = "commit-msg";
pub const HOOK_IDENTIFIER: &str = "# Created by CommitPrefix";

const HOOK_TEMPLATE: &str = r#"#!/bin/sh
{identifier} {version}
# Prepends the stored commit prefixes to the commit message. Do not edit.

COMMIT_MSG_FILE="$1"

if [ -z "$COMMIT_MSG_FILE" ]; then
    echo "commit-msg: expected the commit message file as an argument" >&2
    exit 1
fi

PATH="/usr/local/bin:$PATH"

PREFIXES=$({executable} -o)
if [ $? -ne 0 ]; then
    echo "- CommitPrefix Error" >&2
    exit 1
fi

# Nothing stored, keep the message as written
if [ -z "$PREFIXES" ]; then
    exit 0
fi

MSG=$(cat "$COMMIT_MSG_FILE")
if ! printf '%s %s\n' "$PREFIXES" "$MSG" > "$COMMIT_MSG_FILE"; then
    echo "commit-msg: there was an error writing to the commit message" >&2
    exit 1
fi
"#;

/// Render the hook script for the given command name.
pub fn render_script(executable: &str) -> String {
    HOOK_TEMPLATE
        .replace("{identifier}", HOOK_IDENTIFIER)
        .replace("{version}", env!("CARGO_PKG_VERSION"))
        .replace("{executable}", executable)
}

/// Yes/no questions asked during hook installation.
pub trait Prompter {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Uses a dialoguer prompt on a terminal, otherwise reads one line from stdin.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
            let answer = Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()?;
            return Ok(answer);
        }

        eprintln!("{prompt} [y/n]");
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        parse_answer(&answer)
    }
}

/// Accepts exactly `y` or `n`.
pub fn parse_answer(answer: &str) -> Result<bool> {
    match answer.trim_end_matches(['\r', '\n']) {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(Error::InvalidYesOrNo),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// No hook existed, ours was written
    Created,
    /// Our hook is already in place
    Current,
    /// Our hook from another version or executable was regenerated
    Updated,
    /// A foreign hook was replaced
    Overwritten,
    /// A foreign hook was left in place
    Kept,
}

pub struct HookManager<'a> {
    hooks_dir: PathBuf,
    executable: &'a str,
    policy: HookOverwrite,
    shell: &'a dyn Shell,
    prompter: &'a dyn Prompter,
}

impl<'a> HookManager<'a> {
    pub fn new(
        common_dir: &Path,
        executable: &'a str,
        policy: HookOverwrite,
        shell: &'a dyn Shell,
        prompter: &'a dyn Prompter,
    ) -> Self {
        Self {
            hooks_dir: common_dir.join("hooks"),
            executable,
            policy,
            shell,
            prompter,
        }
    }

    pub fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(HOOK_NAME)
    }

    /// Make sure our commit-msg hook is installed.
    pub fn ensure_installed(&self) -> Result<HookStatus> {
        if !self.hooks_dir.is_dir() {
            let parent = self
                .hooks_dir
                .parent()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            return Err(Error::DirectoryNotFound {
                name: "hooks".into(),
                path: parent,
            });
        }

        let hook_path = self.hook_path();
        if !hook_path.exists() {
            self.write_hook()?;
            debug!(path = %hook_path.display(), "hook created");
            return Ok(HookStatus::Created);
        }

        let content =
            fs::read_to_string(&hook_path).map_err(|e| Error::HookFile(e.to_string()))?;
        if content.contains(HOOK_IDENTIFIER) {
            if content == render_script(self.executable) {
                return Ok(HookStatus::Current);
            }
            self.write_hook()?;
            debug!(path = %hook_path.display(), "stale hook regenerated");
            return Ok(HookStatus::Updated);
        }

        let overwrite = match self.policy {
            HookOverwrite::Always => true,
            HookOverwrite::Never => {
                warn!(path = %hook_path.display(), "keeping existing commit-msg hook");
                return Ok(HookStatus::Kept);
            }
            HookOverwrite::Prompt => self.prompter.confirm(
                "There seems to be an existing commit-msg found in the hooks directory. Would you like to overwrite?",
            )?,
        };

        if !overwrite {
            return Err(Error::OverwriteCancelled);
        }

        self.write_hook()?;
        debug!(path = %hook_path.display(), "hook overwritten");
        Ok(HookStatus::Overwritten)
    }

    fn write_hook(&self) -> Result<()> {
        let hook_path = self.hook_path();
        let temp_path = self.hooks_dir.join(format!(".{HOOK_NAME}.tmp"));

        fs::write(&temp_path, render_script(self.executable))
            .map_err(|e| Error::HookFile(e.to_string()))?;
        self.shell.make_executable(&temp_path)?;
        fs::rename(&temp_path, &hook_path).map_err(|e| Error::HookFile(e.to_string()))?;
        Ok(())
    }
}
