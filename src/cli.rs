// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;

use crate::domain::UserCommand;
use crate::error::{Error, Result};

const OVERVIEW: &str = "\
Stores a set of prefixes for your commit messages inside the .git folder of the
current repository. A commit-msg hook is generated alongside it and prepends
the prefixes to every commit message.

Modes:

  NORMAL         commitprefix <Prefix1>,<Prefix2>,<Prefix3>...
                 Comma separated values are stored and prepended as [Prefix1][Prefix2]...

  BRANCH_PARSE   commitprefix -b <Validator>
                 The current branch is searched for issue ids matching the validator.
                 With validator \"eng\" and branch ENG-342-SomeFeatureBranchLinkedToENG-101,
                 [ENG-342] and [ENG-101] are prepended along with any stored prefixes.

Switch back with `commitprefix -n`. Run without arguments to view the current state.";

#[derive(Parser, Debug)]
#[command(name = "commitprefix")]
#[command(disable_version_flag = true)]
#[command(about = "Prepends stored prefixes to your commit messages", long_about = OVERVIEW)]
pub struct Cli {
    /// Outputs the current version information
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Outputs the full, formatted prefix to standard output
    #[arg(short, long)]
    pub output: bool,

    /// Deletes the stored prefixes
    #[arg(short, long)]
    pub delete: bool,

    /// Sets the mode to NORMAL
    #[arg(short, long)]
    pub normal: bool,

    /// Sets the mode to BRANCH_PARSE. Requires a validator argument
    #[arg(short = 'b', long = "branchParse")]
    pub branch_parse: bool,

    /// Comma separated prefixes, or the validator for --branchParse
    #[arg(value_name = "ENTRY")]
    pub entry: Vec<String>,
}

/// One recognized piece of the invocation.
#[derive(Debug)]
enum Found {
    Version,
    Output,
    Delete,
    Normal,
    BranchParse,
    Entry(String),
}

pub struct CommandResolver;

impl CommandResolver {
    /// Resolve raw arguments (without the program name) into one command.
    pub fn resolve<I, T>(args: I) -> Result<UserCommand>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv = std::iter::once(OsString::from("commitprefix"))
            .chain(args.into_iter().map(Into::into));

        let cli = Cli::try_parse_from(argv).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp => Error::HelpRequested {
                usage: e.render().to_string(),
            },
            _ => {
                debug!(error = %e, "argument parsing failed");
                Error::CommandNotRecognized
            }
        })?;

        let command = Self::from_cli(cli)?;
        debug!(?command, "command resolved");
        Ok(command)
    }

    pub fn from_cli(cli: Cli) -> Result<UserCommand> {
        let mut found = Vec::new();

        if cli.version {
            found.push(Found::Version);
        }
        if cli.output {
            found.push(Found::Output);
        }
        if cli.delete {
            found.push(Found::Delete);
        }
        if cli.normal {
            found.push(Found::Normal);
        }
        if cli.branch_parse {
            found.push(Found::BranchParse);
        }
        if let Some(entry) = Self::single_entry(cli.entry)? {
            found.push(Found::Entry(entry));
        }

        match found.len() {
            0 => Ok(UserCommand::ViewState),
            1 => Self::single(found.remove(0)),
            2 => Self::pair(found.remove(0), found.remove(0)),
            _ => Err(Error::TooManyArguments),
        }
    }

    fn single_entry(entries: Vec<String>) -> Result<Option<String>> {
        let mut entries = entries.into_iter();
        let Some(entry) = entries.next() else {
            return Ok(None);
        };
        if entries.next().is_some() {
            return Err(Error::InvalidEntryFormat);
        }
        if entry.trim().is_empty() {
            return Err(Error::EmptyEntry);
        }
        if entry.split_whitespace().count() > 1 {
            return Err(Error::InvalidEntryFormat);
        }
        Ok(Some(entry))
    }

    fn single(found: Found) -> Result<UserCommand> {
        match found {
            Found::Version => Ok(UserCommand::OutputVersion),
            Found::Output => Ok(UserCommand::OutputPrefixes),
            Found::Delete => Ok(UserCommand::DeletePrefixes),
            Found::Normal => Ok(UserCommand::ModeNormal),
            Found::Entry(entry) => Ok(UserCommand::NewPrefixes { entry }),
            Found::BranchParse => Err(Error::CommandNotRecognized),
        }
    }

    fn pair(first: Found, second: Found) -> Result<UserCommand> {
        match (first, second) {
            (Found::BranchParse, Found::Entry(validator))
            | (Found::Entry(validator), Found::BranchParse) => {
                Ok(UserCommand::ModeBranchParse { validator })
            }
            _ => Err(Error::CommandNotRecognized),
        }
    }
}
