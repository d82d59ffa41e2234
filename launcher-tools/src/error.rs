// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{ffi::OsString, io, process::ExitStatus};

pub type Result<T, E = CommandError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to launch {}: {source}", .program.to_string_lossy())]
    Launch {
        program: OsString,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    CommandFailure(#[from] CommandFailure),
}

impl CommandError {
    /// Process exit code the launcher should terminate with for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Launch { source, .. } => crate::core::status::launch_failure_code(source),
            Self::CommandFailure(failure) => failure.exit_code(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{} failed ({status})", .program.to_string_lossy())]
pub struct CommandFailure {
    pub program: OsString,
    pub status: ExitStatus,
}

impl CommandFailure {
    pub fn check(program: impl Into<OsString>, status: ExitStatus) -> Result<(), Self> {
        if status.success() {
            Ok(())
        } else {
            Err(CommandFailure {
                program: program.into(),
                status,
            })
        }
    }

    pub fn exit_code(&self) -> u8 {
        crate::core::status::exit_code(self.status)
    }
}
