// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    ffi::{OsStr, OsString},
    process::{Command, Stdio},
};

use typed_builder::TypedBuilder;

use crate::{
    core::mode::FetchMode,
    error::{CommandError, CommandFailure},
    utils::sys,
    Result,
};

/// Program launched when no other is configured.
pub const DEFAULT_PROGRAM: &str = "near-openapi-codegen";

/// Defines a single run of the code generator.
/// After setting the parameters, call `Launcher::launch` to run it.
#[derive(Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct Launcher {
    #[builder(default = OsString::from(DEFAULT_PROGRAM))]
    program: OsString,

    mode: FetchMode,
}

impl Launcher {
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    /// Build the child process command, sharing the launcher's standard streams.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .args(self.mode.codegen_args());
        cmd
    }

    /// Run the code generator and wait for it to exit.
    pub fn launch(&self) -> Result<()> {
        let mut cmd = self.command();
        log::debug!("launching in {} mode: {}", self.mode, sys::command_line(&cmd));

        let status = cmd.status().map_err(|source| CommandError::Launch {
            program: self.program.clone(),
            source,
        })?;
        log::debug!("{} exited with {status}", self.program.to_string_lossy());

        CommandFailure::check(&self.program, status)?;
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::{fs, os::unix::fs::PermissionsExt, path::PathBuf};

    use tempfile::TempDir;

    use super::*;

    /// Writes an executable that records its arguments, one per line, and exits with `code`.
    fn fake_codegen(dir: &TempDir, code: i32) -> (PathBuf, PathBuf) {
        let record = dir.path().join("argv");
        let program = dir.path().join("near-openapi-codegen");
        let script = format!(
            "#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\"; done > '{}'\nexit {code}\n",
            record.display()
        );
        fs::write(&program, script).unwrap();
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();
        (program, record)
    }

    fn recorded_args(record: &PathBuf) -> Vec<String> {
        fs::read_to_string(record)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn defaults() {
        let launcher = Launcher::builder().build();
        assert_eq!(launcher.program(), DEFAULT_PROGRAM);
        assert_eq!(launcher.mode(), FetchMode::Fetch);
    }

    #[test]
    fn command_carries_mode_args() {
        let launcher = Launcher::builder()
            .program("codegen")
            .mode(FetchMode::NoFetch)
            .build();
        let cmd = launcher.command();
        assert_eq!(cmd.get_program(), "codegen");
        assert_eq!(cmd.get_args().collect::<Vec<_>>(), ["--no-fetch"]);

        let cmd = Launcher::builder().program("codegen").build().command();
        assert_eq!(cmd.get_args().count(), 0);
    }

    #[test]
    fn launches_with_no_fetch_flag() {
        let dir = TempDir::new().unwrap();
        let (program, record) = fake_codegen(&dir, 0);
        Launcher::builder()
            .program(program)
            .mode(FetchMode::NoFetch)
            .build()
            .launch()
            .unwrap();
        assert_eq!(recorded_args(&record), ["--no-fetch"]);
    }

    #[test]
    fn launches_without_arguments() {
        let dir = TempDir::new().unwrap();
        let (program, record) = fake_codegen(&dir, 0);
        Launcher::builder().program(program).build().launch().unwrap();
        assert!(recorded_args(&record).is_empty());
    }

    #[test]
    fn child_failure_keeps_exit_code() {
        let dir = TempDir::new().unwrap();
        let (program, _) = fake_codegen(&dir, 42);
        let err = Launcher::builder()
            .program(program)
            .build()
            .launch()
            .unwrap_err();
        assert!(matches!(err, CommandError::CommandFailure(_)));
        assert_eq!(err.exit_code(), 42);
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let dir = TempDir::new().unwrap();
        let err = Launcher::builder()
            .program(dir.path().join("missing"))
            .build()
            .launch()
            .unwrap_err();
        assert!(matches!(err, CommandError::Launch { .. }));
        assert_eq!(err.exit_code(), 127);
    }

    #[test]
    fn non_executable_program_is_a_launch_error() {
        let dir = TempDir::new().unwrap();
        let program = dir.path().join("near-openapi-codegen");
        fs::write(&program, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&program, fs::Permissions::from_mode(0o644)).unwrap();
        let err = Launcher::builder()
            .program(program)
            .build()
            .launch()
            .unwrap_err();
        assert_eq!(err.exit_code(), 126);
    }
}
