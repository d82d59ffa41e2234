// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::ffi::{OsStr, OsString};

use crate::{core::mode::FetchMode, Launcher, Result};

/// Run the code generator for the given launcher arguments.
///
/// The first argument picks the [`FetchMode`]; the rest are ignored and never reach the
/// code generator.
pub fn codegen<I>(program: impl Into<OsString>, args: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<OsStr>,
{
    let launcher = Launcher::builder()
        .program(program)
        .mode(FetchMode::from_args(args))
        .build();
    launcher.launch()
}
