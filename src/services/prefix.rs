// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use tracing::debug;

use crate::domain::{Outcome, PrefixMode, PrefixSnapshot, PrefixState, UserCommand};
use crate::error::Result;
use crate::services::branch::BranchMatcher;
use crate::services::formatter::PrefixFormatter;
use crate::services::git::BranchSource;
use crate::services::store::StateStore;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs one command against the stored prefix state.
///
/// The state is loaded once at construction. Each mutating operation performs
/// a single save; read-only operations never save.
pub struct PrefixService<S, B> {
    store: S,
    branch: B,
    state: PrefixState,
}

impl<S: StateStore, B: BranchSource> PrefixService<S, B> {
    pub fn new(store: S, branch: B) -> Result<Self> {
        let state = store.load()?;
        Ok(Self {
            store,
            branch,
            state,
        })
    }

    pub fn state(&self) -> &PrefixState {
        &self.state
    }

    pub fn execute(&self, command: &UserCommand) -> Result<Outcome> {
        debug!(?command, "executing command");
        match command {
            UserCommand::OutputVersion => Ok(Outcome::Version(VERSION)),
            UserCommand::ViewState => self.view_state().map(Outcome::State),
            UserCommand::OutputPrefixes => self.output_prefixes().map(Outcome::Prefixes),
            UserCommand::DeletePrefixes => self.delete_prefixes(),
            UserCommand::ModeNormal => self.activate_normal_mode(),
            UserCommand::ModeBranchParse { validator } => self.activate_branch_mode(validator),
            UserCommand::NewPrefixes { entry } => self.write_prefixes(entry),
        }
    }

    fn branch_prefixes(&self) -> Result<Vec<String>> {
        let matcher = BranchMatcher::for_validator(self.state.branch_validator())?;
        let branch = self.branch.current_branch()?;
        matcher.prefixes(&branch)
    }

    pub fn output_prefixes(&self) -> Result<String> {
        let snapshot = self.view_state()?;
        Ok(PrefixFormatter::compose(
            &snapshot.branch_prefixes,
            &snapshot.normal_prefixes,
        ))
    }

    pub fn view_state(&self) -> Result<PrefixSnapshot> {
        let branch_prefixes = match self.state.mode() {
            PrefixMode::Normal => Vec::new(),
            PrefixMode::BranchParse => self.branch_prefixes()?,
        };
        Ok(PrefixSnapshot {
            mode: self.state.mode(),
            branch_prefixes,
            normal_prefixes: self.state.prefixes().to_vec(),
        })
    }

    pub fn delete_prefixes(&self) -> Result<Outcome> {
        self.store.save(&self.state.updated(Vec::new()))?;
        Ok(Outcome::Deleted)
    }

    pub fn write_prefixes(&self, raw: &str) -> Result<Outcome> {
        let prefixes = PrefixFormatter::format_prefixes(raw);
        self.store.save(&self.state.updated(prefixes.clone()))?;
        Ok(Outcome::Stored(prefixes))
    }

    pub fn activate_branch_mode(&self, raw_validator: &str) -> Result<Outcome> {
        let validator = PrefixFormatter::format_validator(raw_validator)?;
        self.store
            .save(&self.state.updated_as_branch_mode(validator.clone()))?;
        Ok(Outcome::BranchMode(validator))
    }

    pub fn activate_normal_mode(&self) -> Result<Outcome> {
        // A legacy file can load as NORMAL while still carrying a validator
        if self.state.mode() == PrefixMode::Normal && self.state.branch_validator().is_none() {
            return Ok(Outcome::AlreadyNormal);
        }
        self.store.save(&self.state.updated_as_normal_mode())?;
        Ok(Outcome::NormalMode)
    }
}
