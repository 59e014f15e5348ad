//! crudgen CLI tool

use clap::Parser;
use console::style;
use crudgen_cli_lib::{Cli, MakeCrudCommand};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = crudgen::observability::init(cli.verbose, cli.log_json) {
        eprintln!("{} {e}", style("warning:").yellow().bold());
    }

    match MakeCrudCommand::new(cli).execute() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
