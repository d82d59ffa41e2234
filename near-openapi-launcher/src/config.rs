// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{env, ffi::OsString};

use eyre::bail;
use launcher_tools::DEFAULT_PROGRAM;

use crate::constants::PROGRAM_ENV;

/// Launcher settings taken from the environment.
#[derive(Debug)]
pub struct Config {
    /// Path or name of the code generator executable.
    pub program: OsString,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_program_var(env::var_os(PROGRAM_ENV))
    }

    fn from_program_var(value: Option<OsString>) -> eyre::Result<Self> {
        let program = match value {
            Some(value) if !value.is_empty() => value,
            _ => OsString::from(DEFAULT_PROGRAM),
        };
        if program.to_string_lossy().trim().is_empty() {
            bail!("{PROGRAM_ENV} is blank");
        }
        Ok(Self { program })
    }
}
