// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Process exit status for a finished invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitStatus {
    /// The invocation finished as expected
    Successful = 0,
    /// An error that has not been accounted for
    UnexpectedError = 1,
    /// The user stopped the invocation short
    UserInitiated = 2,
    /// The inputs provided were invalid
    InvalidInputs = 3,
    /// Stored settings make the request impossible in the current context
    InvalidContext = 4,
    /// Required resources are inaccessible or unavailable
    UnavailableDependencies = 5,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    // ─── Command line ───
    #[error("Command not recognized")]
    #[diagnostic(
        code(commitprefix::cli::not_recognized),
        help("Enter \"--help\" for usage")
    )]
    CommandNotRecognized,

    #[error("Too many arguments entered. Only two at a time is supported")]
    #[diagnostic(code(commitprefix::cli::too_many))]
    TooManyArguments,

    #[error("Your entry is empty")]
    #[diagnostic(code(commitprefix::cli::empty_entry))]
    EmptyEntry,

    #[error("Your entry contains invalid spaces")]
    #[diagnostic(
        code(commitprefix::cli::entry_format),
        help("Separate multiple prefixes with commas, not spaces")
    )]
    InvalidEntryFormat,

    #[error("{usage}")]
    HelpRequested { usage: String },

    // ─── Prefix state ───
    #[error("The branch validator must be at least two characters long and contain no numbers")]
    #[diagnostic(code(commitprefix::validator::format))]
    InvalidBranchValidatorFormat,

    #[error("Your branch does not contain an issue matching {validator}")]
    #[diagnostic(
        code(commitprefix::branch::invalid_prefix),
        help("Either change your branch name or use commitprefix in MODE NORMAL: commitprefix -n")
    )]
    InvalidBranchPrefix { validator: String },

    #[error("Attempting to provide a branch prefix without a branch validator")]
    #[diagnostic(
        code(commitprefix::branch::no_validator),
        help("Set one with: commitprefix -b <validator>")
    )]
    BranchValidatorNotFound,

    // ─── User interaction ───
    #[error("Overwrite is cancelled")]
    OverwriteCancelled,

    #[error("Expected y or n. The transaction has been cancelled")]
    #[diagnostic(code(commitprefix::prompt::yes_no))]
    InvalidYesOrNo,

    #[error("Dialog error: {0}")]
    Dialog(String),

    // ─── Repository ───
    #[error("Not in a git repository: {location}")]
    #[diagnostic(
        code(commitprefix::git::not_repo),
        help("Run this command inside a git repository")
    )]
    NotAGitRepo { location: String },

    #[error("Directory named {name} was not found at {path}")]
    #[diagnostic(code(commitprefix::git::missing_dir))]
    DirectoryNotFound { name: String, path: String },

    #[error("Unable to read the git HEAD for branch information: {0}")]
    #[diagnostic(code(commitprefix::git::head))]
    HeadUnreadable(String),

    #[error("An error occurred while reading or writing the CommitPrefix state: {0}")]
    #[diagnostic(code(commitprefix::state::io))]
    StateFile(String),

    #[error("An error occurred while reading or writing the commit-msg hook: {0}")]
    #[diagnostic(code(commitprefix::hook::io))]
    HookFile(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(commitprefix::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status(&self) -> ExitStatus {
        match self {
            Self::HelpRequested { .. } => ExitStatus::Successful,
            Self::CommandNotRecognized
            | Self::TooManyArguments
            | Self::EmptyEntry
            | Self::InvalidEntryFormat
            | Self::InvalidBranchValidatorFormat
            | Self::InvalidYesOrNo
            | Self::Config(_) => ExitStatus::InvalidInputs,
            Self::InvalidBranchPrefix { .. } => ExitStatus::InvalidContext,
            Self::OverwriteCancelled => ExitStatus::UserInitiated,
            Self::BranchValidatorNotFound
            | Self::NotAGitRepo { .. }
            | Self::DirectoryNotFound { .. }
            | Self::HeadUnreadable(_)
            | Self::StateFile(_)
            | Self::HookFile(_)
            | Self::Io(_) => ExitStatus::UnavailableDependencies,
            Self::Dialog(_) => ExitStatus::UnexpectedError,
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
