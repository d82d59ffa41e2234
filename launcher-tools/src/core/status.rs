// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Translate child process outcomes into launcher exit codes.
//!
//! Codes follow what a POSIX shell reports for the same failure, so the launcher is a drop-in
//! replacement for a `set -e` wrapper script.

use std::{io, process::ExitStatus};

use cfg_if::cfg_if;

#[cfg(unix)]
use std::os::unix::process::ExitStatusExt;

/// Generic failure, used when nothing more specific is known.
pub const FAILURE: u8 = 1;
/// The program exists but could not be executed.
pub const NOT_EXECUTABLE: u8 = 126;
/// The program could not be found.
pub const NOT_FOUND: u8 = 127;
/// Added to the signal number when the child was killed by a signal.
pub const SIGNAL_BASE: u8 = 128;

/// Exit code mirroring a finished child process.
///
/// Returns 0 only when the child succeeded.
pub fn exit_code(status: ExitStatus) -> u8 {
    if status.success() {
        return 0;
    }
    if let Some(code) = status.code() {
        return match u8::try_from(code) {
            Ok(0) | Err(_) => FAILURE,
            Ok(code) => code,
        };
    }

    cfg_if! {
        if #[cfg(unix)] {
            status
                .signal()
                .and_then(|signal| u8::try_from(signal).ok())
                .and_then(|signal| SIGNAL_BASE.checked_add(signal))
                .unwrap_or(FAILURE)
        } else {
            FAILURE
        }
    }
}

/// Exit code for a program that could not be started at all.
pub fn launch_failure_code(err: &io::Error) -> u8 {
    match err.kind() {
        io::ErrorKind::NotFound => NOT_FOUND,
        io::ErrorKind::PermissionDenied => NOT_EXECUTABLE,
        _ => FAILURE,
    }
}
