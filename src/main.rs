//! Entry point for factcheck.
use std::process::ExitCode;

use clap::Parser;
use factcheck::{
    cli::{execute_command, FactcheckArgs, RunExit},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RunExit> {
    telemetry::init_tracing().map_err(RunExit::from_error)?;
    let args = FactcheckArgs::parse();
    let command = args.into_command().map_err(RunExit::from_error)?;
    let message = execute_command(command).map_err(RunExit::from_error)?;
    println!("{message}");
    Ok(())
}
