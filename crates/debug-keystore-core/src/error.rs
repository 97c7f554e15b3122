use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Filesystem step that failed while writing the keystore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    CreateDir,
    WriteFile,
}

impl fmt::Display for IoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoAction::CreateDir => f.write_str("create directory"),
            IoAction::WriteFile => f.write_str("write file"),
        }
    }
}

/// Errors produced while materializing the keystore. None are recovered locally.
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// A required environment variable is unset (or, for HOME, empty).
    #[error("required environment variable {name} is not set")]
    MissingInput { name: &'static str },
    /// The environment value is not valid base64.
    #[error("{name} is not valid base64: {reason}")]
    Decode { name: &'static str, reason: String },
    /// Directory creation or file write failed.
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: IoAction,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MaterializeError {
    pub(crate) fn io(action: IoAction, path: impl Into<PathBuf>, source: io::Error) -> Self {
        MaterializeError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_names_action_and_path() {
        let err = MaterializeError::io(
            IoAction::CreateDir,
            "/nope/.android",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("failed to create directory /nope/.android"), "{msg}");
    }

    #[test]
    fn missing_input_names_variable() {
        let err = MaterializeError::MissingInput {
            name: "DEBUG_KEYSTORE",
        };
        assert_eq!(
            err.to_string(),
            "required environment variable DEBUG_KEYSTORE is not set"
        );
    }
}
