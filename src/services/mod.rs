// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

pub mod branch;
pub mod formatter;
pub mod git;
pub mod hook;
pub mod prefix;
pub mod store;
