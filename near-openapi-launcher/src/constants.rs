// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Environment variable overriding the code generator program.
pub const PROGRAM_ENV: &str = "NEAR_OPENAPI_CODEGEN";
