use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("'{program}' was not found on PATH")]
    ProgramNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to start '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with {}", describe_exit(.code))]
    CommandFailed { program: String, code: Option<i32> },

    #[error("project directory {} was not created by the initializer", .0.display())]
    ProjectDirMissing(PathBuf),

    #[error("file system error at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    /// Process exit code to use when this error reaches `main`.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::CommandFailed {
                code: Some(code), ..
            } => *code,
            _ => 1,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}
