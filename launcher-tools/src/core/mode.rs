// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{ffi::OsStr, fmt};

/// Flag telling the code generator to reuse its local copy of the OpenAPI spec.
pub const NO_FETCH_FLAG: &str = "--no-fetch";

/// Whether the code generator fetches the OpenAPI spec before generating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchMode {
    #[default]
    Fetch,
    NoFetch,
}

impl FetchMode {
    /// Select the mode from launcher arguments.
    ///
    /// Only the first argument is inspected, and only an exact match on
    /// [`NO_FETCH_FLAG`] selects [`FetchMode::NoFetch`]. Anything else, including no
    /// arguments at all, falls back to fetching.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        match args.into_iter().next() {
            Some(arg) if arg.as_ref() == NO_FETCH_FLAG => Self::NoFetch,
            _ => Self::Fetch,
        }
    }

    /// Arguments passed through to the code generator.
    pub fn codegen_args(self) -> &'static [&'static str] {
        match self {
            Self::Fetch => &[],
            Self::NoFetch => &[NO_FETCH_FLAG],
        }
    }
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Fetch => f.write_str("fetch"),
            Self::NoFetch => f.write_str("no-fetch"),
        }
    }
}
