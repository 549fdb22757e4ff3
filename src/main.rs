// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use muembed::{app, cli, logging, presentation};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[muembed] error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = cli::load_config()?;
    logging::init(config.log_level);

    let output = app::run(&config)?;
    presentation::print_results(&output, &config)?;
    Ok(())
}
