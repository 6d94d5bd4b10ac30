// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

mod helpers;

use commitprefix::app::{App, render};
use commitprefix::domain::{Outcome, PrefixMode, PrefixSnapshot, UserCommand};
use commitprefix::error::Error;
use commitprefix::services::git::RepositoryContext;
use helpers::{ScriptedPrompter, init_repo};
use tempfile::TempDir;

fn plain(outcome: &Outcome) -> String {
    console::set_colors_enabled(false);
    render(outcome)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// ─── Rendering ───────────────────────────────────────────────────────────────

#[test]
fn version_line() {
    insta::assert_snapshot!(plain(&Outcome::Version("1.2.0")), @"CommitPrefix version 1.2.0");
}

#[test]
fn prefixes_are_printed_verbatim() {
    assert_eq!(
        plain(&Outcome::Prefixes("[ENG-1][wip]".into())),
        "[ENG-1][wip]"
    );
}

#[test]
fn normal_state_view() {
    let outcome = Outcome::State(PrefixSnapshot {
        mode: PrefixMode::Normal,
        branch_prefixes: Vec::new(),
        normal_prefixes: strings(&["[ios]", "[wip]"]),
    });
    insta::assert_snapshot!(plain(&outcome), @r"
    CommitPrefix MODE NORMAL
    - prefixes: [ios][wip]
    ");
}

#[test]
fn branch_state_view() {
    let outcome = Outcome::State(PrefixSnapshot {
        mode: PrefixMode::BranchParse,
        branch_prefixes: strings(&["[ENG-342]"]),
        normal_prefixes: strings(&["[wip]"]),
    });
    insta::assert_snapshot!(plain(&outcome), @r"
    CommitPrefix MODE BRANCH_PARSE
    - branch prefixes: [ENG-342]
    - stored prefixes: [wip]
    ");
}

#[test]
fn mutation_messages() {
    assert_eq!(plain(&Outcome::Deleted), "CommitPrefix DELETED");
    assert_eq!(
        plain(&Outcome::Stored(strings(&["[a]", "[b]"]))),
        "CommitPrefix STORED [a][b]"
    );
    assert_eq!(
        plain(&Outcome::BranchMode("eng".into())),
        "CommitPrefix MODE BRANCH_PARSE eng"
    );
    assert_eq!(plain(&Outcome::NormalMode), "CommitPrefix MODE NORMAL");
    assert_eq!(
        plain(&Outcome::AlreadyNormal),
        "CommitPrefix already in MODE NORMAL"
    );
}

// ─── Execution ───────────────────────────────────────────────────────────────

#[test]
fn version_needs_no_repository() {
    let dir = TempDir::new().unwrap();
    let app = App::new(UserCommand::OutputVersion, dir.path().to_path_buf());
    assert!(matches!(app.execute().unwrap(), Outcome::Version(_)));
}

#[test]
fn execute_runs_from_a_subdirectory() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path(), "main");
    let nested = dir.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    let store = App::with_prompter(
        UserCommand::NewPrefixes {
            entry: "ios".into(),
        },
        nested.clone(),
        Box::new(ScriptedPrompter::new("n")),
    );
    assert_eq!(
        store.execute().unwrap(),
        Outcome::Stored(strings(&["[ios]"]))
    );

    let output = App::new(UserCommand::OutputPrefixes, nested);
    assert_eq!(
        output.execute().unwrap(),
        Outcome::Prefixes("[ios]".into())
    );
}

#[test]
fn declined_overwrite_leaves_state_untouched() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path(), "main");
    std::fs::write(
        dir.path().join(".git/hooks/commit-msg"),
        "#!/bin/sh\nexit 0\n",
    )
    .unwrap();

    let app = App::with_prompter(
        UserCommand::NewPrefixes {
            entry: "ios".into(),
        },
        dir.path().to_path_buf(),
        Box::new(ScriptedPrompter::new("n")),
    );
    assert!(matches!(app.execute(), Err(Error::OverwriteCancelled)));
    assert!(!dir.path().join(".git/CommitPrefix.JSON").exists());
}

#[test]
fn missing_repository_is_reported() {
    let dir = TempDir::new().unwrap();
    let app = App::new(UserCommand::ViewState, dir.path().to_path_buf());
    assert!(matches!(app.execute(), Err(Error::NotAGitRepo { .. })));
}

#[test]
fn main_worktree_shares_git_and_common_dir() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path(), "main");
    let nested = dir.path().join("src");
    std::fs::create_dir_all(&nested).unwrap();

    let repo = RepositoryContext::discover(&nested).unwrap();
    assert!(repo.git_dir().ends_with(".git"));
    assert!(repo.common_dir().ends_with(".git"));
    assert!(repo.work_dir().join(".git").is_dir());
}
