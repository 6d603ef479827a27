use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::ScaffoldError;

/// One external command: program, arguments and the directory to run it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: &str, cwd: &Path) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Runs the command to completion. A non-zero exit is an error.
    fn run(&self, invocation: &Invocation) -> Result<(), ScaffoldError>;
}

/// Runs commands for real, with stdin/stdout/stderr inherited so the
/// initializer and installers can talk to the user directly.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ScaffoldError> {
        let program =
            which::which(&invocation.program).map_err(|source| ScaffoldError::ProgramNotFound {
                program: invocation.program.clone(),
                source,
            })?;

        tracing::debug!(
            command = %invocation,
            cwd = %invocation.cwd.display(),
            resolved = %program.display(),
            "running external command"
        );

        let status = Command::new(&program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ScaffoldError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        tracing::debug!(command = %invocation, code = ?status.code(), "external command finished");

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::CommandFailed {
                program: invocation.program.clone(),
                code: status.code(),
            })
        }
    }
}
