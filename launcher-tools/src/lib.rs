// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for launching the NEAR OpenAPI code generator.

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

mod launcher;

pub use error::{CommandError, CommandFailure, Result};
pub use launcher::*;
