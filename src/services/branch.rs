// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::services::formatter::PrefixFormatter;

/// Extracts `<validator>-<digits>` issue ids from a branch name.
pub struct BranchMatcher {
    validator: String,
    pattern: Regex,
}

impl BranchMatcher {
    pub fn new(validator: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"(?i){}-\d+", regex::escape(validator)))
            .map_err(|_| Error::InvalidBranchValidatorFormat)?;
        Ok(Self {
            validator: validator.to_string(),
            pattern,
        })
    }

    /// Build a matcher for a possibly missing validator.
    pub fn for_validator(validator: Option<&str>) -> Result<Self> {
        let validator = validator.ok_or(Error::BranchValidatorNotFound)?;
        Self::new(validator)
    }

    /// Unique issue ids in the branch, in order of first appearance.
    ///
    /// Matching is case-insensitive but ids keep the casing used in the
    /// branch. Deduplication compares exact text.
    pub fn matches(&self, branch: &str) -> Result<Vec<String>> {
        let mut found: Vec<String> = Vec::new();
        for m in self.pattern.find_iter(branch) {
            if !found.iter().any(|f| f == m.as_str()) {
                found.push(m.as_str().to_string());
            }
        }

        debug!(branch, validator = %self.validator, count = found.len(), "branch matched");

        if found.is_empty() {
            return Err(Error::InvalidBranchPrefix {
                validator: self.validator.clone(),
            });
        }
        Ok(found)
    }

    /// Matches wrapped as `[ID]`.
    pub fn prefixes(&self, branch: &str) -> Result<Vec<String>> {
        Ok(self
            .matches(branch)?
            .iter()
            .map(|m| PrefixFormatter::bracket(m))
            .collect())
    }
}
