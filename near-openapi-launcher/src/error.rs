// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use launcher_tools::CommandError;

pub type LauncherResult = Result<(), LauncherError>;

#[derive(Debug)]
pub struct LauncherError {
    error: eyre::Error,
    exit_code: u8,
    reported: bool,
}

impl LauncherError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_code)
    }

    /// Whether the error should be printed. Failures of the code generator itself are not, it
    /// has already written its own diagnostics.
    pub fn is_reported(&self) -> bool {
        self.reported
    }
}

impl fmt::Display for LauncherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<eyre::Error> for LauncherError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: 1,
            reported: true,
        }
    }
}

impl From<CommandError> for LauncherError {
    fn from(err: CommandError) -> Self {
        let reported = matches!(err, CommandError::Launch { .. });
        Self {
            exit_code: err.exit_code(),
            error: err.into(),
            reported,
        }
    }
}
