//! Command handlers for the `ecs` CLI.
//!
//! Each handler returns a [`CommandError`] instead of exiting, so `main`
//! owns the exit status.

mod debug;
mod run;

pub use debug::{lex_file, parse_file, render_program, render_tokens};
pub use run::{run_file, run_source};

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Parse diagnostics, one per line.
    #[error("{}", .0.join("\n"))]
    Parse(Vec<String>),

    /// The program evaluated to an error value.
    #[error("{0}")]
    Runtime(String),
}

pub(crate) fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|error| {
        let path = path.to_owned();
        match error.kind() {
            std::io::ErrorKind::NotFound => CommandError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => CommandError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => CommandError::InvalidUtf8 { path },
            _ => CommandError::Io {
                path,
                source: error,
            },
        }
    })
}
