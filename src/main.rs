// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

use std::process::ExitCode;

use bwdocx::app::{self, Cli};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse_from(app::normalize_args(std::env::args_os()));
    app::init_tracing(cli.verbose);

    match app::run(cli.into_config()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
