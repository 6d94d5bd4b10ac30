// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Where commit prefixes come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrefixMode {
    /// Only the explicitly stored prefixes
    #[default]
    Normal,
    /// Issue ids parsed from the branch name, followed by the stored prefixes
    BranchParse,
}

impl PrefixMode {
    pub fn code(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::BranchParse => 1,
        }
    }

    /// Unknown codes fall back to `Normal`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::BranchParse,
            _ => Self::Normal,
        }
    }
}

impl std::fmt::Display for PrefixMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::BranchParse => write!(f, "BRANCH_PARSE"),
        }
    }
}

impl Serialize for PrefixMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for PrefixMode {
    // A corrupt mode value must not make the whole file unreadable.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_i64()
            .map(Self::from_code)
            .unwrap_or(Self::Normal))
    }
}

/// The persisted prefix configuration of one repository.
///
/// Values are immutable; every transition returns a new state. The validator
/// is only set by [`PrefixState::updated_as_branch_mode`], so a state built
/// through the transitions always has a validator exactly in branch mode.
/// Loaded legacy files are taken as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixState {
    #[serde(rename = "prefix_mode", default)]
    mode: PrefixMode,

    #[serde(
        rename = "branch_issue_validator",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    branch_validator: Option<String>,

    #[serde(default)]
    prefixes: Vec<String>,
}

impl PrefixState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> PrefixMode {
        self.mode
    }

    pub fn branch_validator(&self) -> Option<&str> {
        self.branch_validator.as_deref()
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Replace the stored prefixes, keeping mode and validator.
    pub fn updated(&self, prefixes: Vec<String>) -> Self {
        Self {
            mode: self.mode,
            branch_validator: self.branch_validator.clone(),
            prefixes,
        }
    }

    pub fn updated_as_branch_mode(&self, validator: impl Into<String>) -> Self {
        Self {
            mode: PrefixMode::BranchParse,
            branch_validator: Some(validator.into()),
            prefixes: self.prefixes.clone(),
        }
    }

    pub fn updated_as_normal_mode(&self) -> Self {
        Self {
            mode: PrefixMode::Normal,
            branch_validator: None,
            prefixes: self.prefixes.clone(),
        }
    }
}

/// Resolved view of the prefixes that would apply right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSnapshot {
    pub mode: PrefixMode,
    /// Bracketed prefixes parsed from the branch; empty in normal mode
    pub branch_prefixes: Vec<String>,
    pub normal_prefixes: Vec<String>,
}
