// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::{Path, PathBuf};

use console::style;
use tracing::debug;

use crate::config::Config;
use crate::domain::{Outcome, PrefixMode, UserCommand};
use crate::error::Result;
use crate::services::{
    git::RepositoryContext,
    hook::{HookManager, HookStatus, Prompter, TerminalPrompter},
    prefix::{PrefixService, VERSION},
    store::FileStateStore,
};

pub struct App {
    command: UserCommand,
    start_dir: PathBuf,
    prompter: Box<dyn Prompter>,
}

impl App {
    pub fn new(command: UserCommand, start_dir: PathBuf) -> Self {
        Self::with_prompter(command, start_dir, Box::new(TerminalPrompter))
    }

    pub fn with_prompter(
        command: UserCommand,
        start_dir: PathBuf,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            command,
            start_dir,
            prompter,
        }
    }

    pub fn run(&self) -> Result<()> {
        let outcome = self.execute()?;
        println!("{}", render(&outcome));
        Ok(())
    }

    /// Run the command and return what happened without printing it.
    pub fn execute(&self) -> Result<Outcome> {
        if !self.command.needs_repository() {
            return Ok(Outcome::Version(VERSION));
        }

        let repo = RepositoryContext::discover(&self.start_dir)?;
        let config = Config::load(repo.work_dir())?;
        debug!(
            state_file = %config.state_file,
            hook_overwrite = %config.hook_overwrite,
            "config loaded"
        );

        // Hooks and state live in the shared git dir so linked worktrees see them
        let hooks = HookManager::new(
            repo.common_dir(),
            &config.executable,
            config.hook_overwrite,
            repo.shell(),
            self.prompter.as_ref(),
        );
        let status = hooks.ensure_installed()?;
        self.report_hook(status, &hooks.hook_path());

        let store = FileStateStore::new(repo.common_dir(), &config.state_file);
        let service = PrefixService::new(store, &repo)?;
        service.execute(&self.command)
    }

    fn report_hook(&self, status: HookStatus, path: &Path) {
        match status {
            HookStatus::Created => {
                self.print_info(&format!("commit-msg hook installed at {}", path.display()));
            }
            HookStatus::Overwritten => {
                self.print_info("Overwriting existing commit-msg with generated hook");
            }
            HookStatus::Updated => {
                self.print_info(&format!("commit-msg hook updated at {}", path.display()));
            }
            HookStatus::Kept => {
                self.print_warning(&format!(
                    "Existing commit-msg hook at {} was kept, prefixes will not be applied",
                    path.display()
                ));
            }
            HookStatus::Current => {}
        }
    }

    // ─── Output Helpers ───

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }

    fn print_warning(&self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }
}

/// Format an outcome for standard output.
///
/// Prefix output stays unstyled since the commit-msg hook reads it verbatim.
pub fn render(outcome: &Outcome) -> String {
    let name = "CommitPrefix";
    match outcome {
        Outcome::Version(version) => {
            format!("{name} {}", style(format!("version {version}")).cyan())
        }
        Outcome::Prefixes(prefixes) => prefixes.clone(),
        Outcome::State(snapshot) => match snapshot.mode {
            PrefixMode::Normal => format!(
                "{name} {}\n- prefixes: {}",
                style("MODE NORMAL").cyan(),
                style(snapshot.normal_prefixes.concat()).cyan()
            ),
            PrefixMode::BranchParse => format!(
                "{name} {}\n- branch prefixes: {}\n- stored prefixes: {}",
                style("MODE BRANCH_PARSE").cyan(),
                style(snapshot.branch_prefixes.concat()).cyan(),
                style(snapshot.normal_prefixes.concat()).cyan()
            ),
        },
        Outcome::Deleted => format!("{name} {}", style("DELETED").red()),
        Outcome::Stored(prefixes) => format!(
            "{name} {} {}",
            style("STORED").green(),
            style(prefixes.concat()).green()
        ),
        Outcome::BranchMode(validator) => format!(
            "{name} {} {}",
            style("MODE BRANCH_PARSE").cyan(),
            style(validator).green()
        ),
        Outcome::NormalMode => format!("{name} {}", style("MODE NORMAL").cyan()),
        Outcome::AlreadyNormal => format!(
            "{name} {} {}",
            style("already in").yellow(),
            style("MODE NORMAL").cyan()
        ),
    }
}
