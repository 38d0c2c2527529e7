//! Randeploy CLI - deploy random Salesforce components
//!
//! Usage: randeploy [--once | --continuous | --components <NAMES>] [OPTIONS]

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::run::cmd_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}
