// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static DECIMAL_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());

pub struct PrefixFormatter;

impl PrefixFormatter {
    /// Wrap a single value as `[value]`.
    pub fn bracket(value: &str) -> String {
        format!("[{value}]")
    }

    /// Split a comma separated entry into bracketed prefixes.
    ///
    /// Every segment produced by the split becomes a prefix, empty ones
    /// included: `"a,,b"` yields `["[a]", "[]", "[b]"]`.
    pub fn format_prefixes(raw: &str) -> Vec<String> {
        raw.split(',').map(Self::bracket).collect()
    }

    /// Trim a branch validator and check it can be used as an issue key.
    ///
    /// Any decimal digit rejects it, other numeric characters such as `Ⅻ` do not.
    pub fn format_validator(raw: &str) -> Result<String> {
        let validator = raw.trim();
        let has_digits = DECIMAL_DIGIT.is_match(validator);
        if has_digits || validator.chars().count() < 2 {
            return Err(Error::InvalidBranchValidatorFormat);
        }
        Ok(validator.to_string())
    }

    /// Branch prefixes first, then the stored ones, without separators.
    pub fn compose(branch_prefixes: &[String], normal_prefixes: &[String]) -> String {
        let mut composed = branch_prefixes.concat();
        composed.push_str(&normal_prefixes.concat());
        composed
    }
}
