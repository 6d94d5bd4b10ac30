// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Source of the current branch name.
pub trait BranchSource {
    fn current_branch(&self) -> Result<String>;
}

impl<T: BranchSource + ?Sized> BranchSource for &T {
    fn current_branch(&self) -> Result<String> {
        (**self).current_branch()
    }
}

/// Process-level file capabilities needed by the hook installer.
pub trait Shell {
    fn make_executable(&self, path: &Path) -> Result<()>;
}

pub struct SystemShell;

impl Shell for SystemShell {
    fn make_executable(&self, path: &Path) -> Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(path, perms)?;
        }
        #[cfg(not(unix))]
        let _ = path;
        Ok(())
    }
}

/// The repository an invocation works against.
///
/// In a linked worktree `git_dir` is `.git/worktrees/<name>` while
/// `common_dir` is the shared `.git` holding hooks and prefix state.
pub struct RepositoryContext {
    repo: gix::Repository,
    work_dir: PathBuf,
    git_dir: PathBuf,
    common_dir: PathBuf,
    shell: Box<dyn Shell>,
}

impl RepositoryContext {
    pub fn discover(start: &Path) -> Result<Self> {
        Self::discover_with_shell(start, Box::new(SystemShell))
    }

    pub fn discover_with_shell(start: &Path, shell: Box<dyn Shell>) -> Result<Self> {
        let repo = gix::discover(start).map_err(|_| Error::NotAGitRepo {
            location: start.display().to_string(),
        })?;

        let work_dir = repo
            .work_dir()
            .ok_or_else(|| Error::NotAGitRepo {
                location: start.display().to_string(),
            })?
            .to_path_buf();
        let git_dir = repo.git_dir().to_path_buf();
        let common_dir = repo.common_dir().to_path_buf();

        debug!(
            work_dir = %work_dir.display(),
            git_dir = %git_dir.display(),
            common_dir = %common_dir.display(),
            "repository discovered"
        );

        Ok(Self {
            repo,
            work_dir,
            git_dir,
            common_dir,
            shell,
        })
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn common_dir(&self) -> &Path {
        &self.common_dir
    }

    pub fn shell(&self) -> &dyn Shell {
        self.shell.as_ref()
    }
}

impl BranchSource for RepositoryContext {
    fn current_branch(&self) -> Result<String> {
        let head = self
            .repo
            .head_name()
            .map_err(|e| Error::HeadUnreadable(e.to_string()))?;

        match head {
            Some(name) => Ok(name.shorten().to_string()),
            None => Err(Error::HeadUnreadable("HEAD is detached".into())),
        }
    }
}
