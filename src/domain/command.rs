// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

/// The single intent resolved from one invocation's arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    ViewState,
    OutputPrefixes,
    DeletePrefixes,
    ModeNormal,
    ModeBranchParse { validator: String },
    NewPrefixes { entry: String },
    OutputVersion,
}

impl UserCommand {
    /// Whether the command reads or writes the repository at all.
    pub fn needs_repository(&self) -> bool {
        !matches!(self, Self::OutputVersion)
    }
}

/// What a command did, handed back for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Version(&'static str),
    Prefixes(String),
    State(super::PrefixSnapshot),
    Deleted,
    Stored(Vec<String>),
    BranchMode(String),
    NormalMode,
    AlreadyNormal,
}
