// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod config;
mod domain;
mod error;
mod services;

use app::App;
use cli::CommandResolver;
use error::{Error, ExitStatus};

fn main() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    let filter = EnvFilter::try_from_env("COMMITPREFIX_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("commitprefix=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::env::var("NO_COLOR").is_err())
        .without_time()
        .init();

    let status = match run() {
        Ok(()) => ExitStatus::Successful,
        Err(e) => report(e),
    };
    std::process::exit(status.code());
}

fn run() -> error::Result<()> {
    let command = CommandResolver::resolve(std::env::args_os().skip(1))?;
    let start_dir = std::env::current_dir()?;
    App::new(command, start_dir).run()
}

fn report(e: Error) -> ExitStatus {
    let status = e.status();
    match e {
        Error::HelpRequested { usage } => println!("{usage}"),
        Error::OverwriteCancelled => eprintln!("Overwrite is cancelled."),
        _ => eprintln!("{:?}", miette::Report::new(e)),
    }
    status
}
