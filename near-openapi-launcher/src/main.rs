// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `near-openapi-launcher`.

use std::{env, ffi::OsString, iter, process::ExitCode};

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

mod config;
mod constants;
mod error;
mod utils;

use config::Config;
use error::LauncherResult;

#[derive(Debug, Parser)]
#[command(name = "near-openapi-launcher")]
#[command(about = "Run near-openapi-codegen, optionally skipping the spec fetch", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Pass `--no-fetch` first to reuse the local OpenAPI spec. Other arguments are ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

fn main() -> ExitCode {
    // Close option parsing up front so a user supplied `--` stays a plain argument
    let mut argv = env::args_os();
    let bin = argv
        .next()
        .unwrap_or_else(|| OsString::from("near-openapi-launcher"));
    let args = Args::parse_from(iter::once(bin).chain(iter::once("--".into())).chain(argv));

    // Quiet unless RUST_LOG asks for more
    if let Err(err) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
    {
        utils::print_error(format!("setting up logger: {err}"));
        return ExitCode::FAILURE;
    }

    match exec(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_reported() {
                utils::print_error(&err);
            } else {
                log::debug!("{err}");
            }
            err.exit_code()
        }
    }
}

fn exec(args: Args) -> LauncherResult {
    let config = Config::from_env()?;
    launcher_tools::ops::codegen(config.program, &args.args)?;
    Ok(())
}
