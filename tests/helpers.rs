// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::process::Command;

use commitprefix::domain::PrefixState;
use commitprefix::error::{Error, Result};
use commitprefix::services::git::{BranchSource, Shell};
use commitprefix::services::hook::Prompter;
use commitprefix::services::store::StateStore;

/// In-memory store that counts saves
#[allow(dead_code)]
#[derive(Default)]
pub struct SpyStore {
    pub state: RefCell<PrefixState>,
    pub writes: Cell<usize>,
}

#[allow(dead_code)]
impl SpyStore {
    pub fn with_state(state: PrefixState) -> Self {
        Self {
            state: RefCell::new(state),
            writes: Cell::new(0),
        }
    }

    pub fn current(&self) -> PrefixState {
        self.state.borrow().clone()
    }
}

impl StateStore for SpyStore {
    fn load(&self) -> Result<PrefixState> {
        Ok(self.state.borrow().clone())
    }

    fn save(&self, state: &PrefixState) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        *self.state.borrow_mut() = state.clone();
        Ok(())
    }
}

/// Branch source returning a fixed name
#[allow(dead_code)]
pub struct FixedBranch(pub &'static str);

impl BranchSource for FixedBranch {
    fn current_branch(&self) -> Result<String> {
        Ok(self.0.to_string())
    }
}

/// Branch source that fails like a detached HEAD
#[allow(dead_code)]
pub struct NoBranch;

impl BranchSource for NoBranch {
    fn current_branch(&self) -> Result<String> {
        Err(Error::HeadUnreadable("HEAD is detached".into()))
    }
}

/// Shell that only records which paths were made executable
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingShell {
    pub executables: RefCell<Vec<PathBuf>>,
}

impl Shell for RecordingShell {
    fn make_executable(&self, path: &Path) -> Result<()> {
        self.executables.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

/// Prompter answering with a fixed line, counting how often it was asked
#[allow(dead_code)]
pub struct ScriptedPrompter {
    pub answer: &'static str,
    pub asked: Cell<usize>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new(answer: &'static str) -> Self {
        Self {
            answer,
            asked: Cell::new(0),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        self.asked.set(self.asked.get() + 1);
        commitprefix::services::hook::parse_answer(self.answer)
    }
}

/// Initialize a git repository in `dir` with HEAD pointing at `branch`
#[allow(dead_code)]
pub fn init_repo(dir: &Path, branch: &str) {
    let status = Command::new("git")
        .args(["init", "-q"])
        .current_dir(dir)
        .status()
        .expect("git must be installed to run these tests");
    assert!(status.success(), "git init failed");

    let status = Command::new("git")
        .args(["symbolic-ref", "HEAD", &format!("refs/heads/{branch}")])
        .current_dir(dir)
        .status()
        .unwrap();
    assert!(status.success(), "git symbolic-ref failed");

    std::fs::create_dir_all(dir.join(".git").join("hooks")).unwrap();
}
