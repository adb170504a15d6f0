//! Synchronous subprocess invocation for the scaffolding pipeline.
//!
//! Every external tool is invoked as a structured (working dir, program,
//! argument list) triple; the call blocks until the subprocess exits because
//! later pipeline steps depend on the filesystem state the tool produces.

use crate::error::{MernkitError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

pub trait ProcessRunner {
    /// Check that `program` can be invoked at all. Runs before any mutation.
    fn preflight(&self, program: &str) -> Result<()> {
        let _ = program;
        Ok(())
    }

    /// Run `program` with `args` in `dir`, blocking until it exits.
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<()>;
}

/// Spawns real subprocesses with stdout/stderr flowing to the terminal.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn preflight(&self, program: &str) -> Result<()> {
        which::which(program).map_err(|_| MernkitError::ToolMissing(program.to_string()))?;
        Ok(())
    }

    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| MernkitError::ToolFailed {
                program: program.to_string(),
                detail: e.to_string(),
            })?;

        if !status.success() {
            return Err(MernkitError::ToolFailed {
                program: program.to_string(),
                detail: format!("exited with {status}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct Invocation {
        pub dir: PathBuf,
        pub program: String,
        pub args: Vec<String>,
    }

    /// Records every invocation instead of spawning. Optionally materializes
    /// a minimal manifest on `npm init` (so the patch step has something to
    /// read) and fails any command whose args contain a given needle.
    #[derive(Default)]
    pub(crate) struct RecordingRunner {
        pub calls: RefCell<Vec<Invocation>>,
        pub fake_npm_init: bool,
        pub fail_when_args_contain: Option<String>,
    }

    const FAKE_MANIFEST: &str = "{\n  \"name\": \"backend\",\n  \"version\": \"1.0.0\",\n  \"scripts\": {\n    \"test\": \"echo \\\"Error: no test specified\\\" && exit 1\"\n  }\n}\n";

    impl ProcessRunner for RecordingRunner {
        fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<()> {
            self.calls.borrow_mut().push(Invocation {
                dir: dir.to_path_buf(),
                program: program.to_string(),
                args: args.to_vec(),
            });

            if self.fake_npm_init
                && program == "npm"
                && args.first().map(String::as_str) == Some("init")
            {
                std::fs::create_dir_all(dir).unwrap();
                std::fs::write(dir.join("package.json"), FAKE_MANIFEST).unwrap();
            }

            if let Some(needle) = &self.fail_when_args_contain {
                if args.iter().any(|a| a.contains(needle.as_str())) {
                    return Err(MernkitError::ToolFailed {
                        program: program.to_string(),
                        detail: "simulated failure".to_string(),
                    });
                }
            }
            Ok(())
        }
    }
}
