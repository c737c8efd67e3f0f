//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("machine not found: {0}")]
    MachineNotFound(String),

    #[error("write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => crate::exitcode::IOERR,
            CliError::MachineNotFound(_) => crate::exitcode::NOINPUT,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Inventory { .. } => crate::exitcode::DATAERR,
                ApplicationError::OperationFailed { source, .. } => {
                    if source.is::<std::io::Error>() {
                        crate::exitcode::IOERR
                    } else {
                        crate::exitcode::SOFTWARE
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exitcode;

    #[test]
    fn given_missing_machine_when_mapping_exit_code_then_noinput() {
        let err = CliError::MachineNotFound("ghost".into());
        assert_eq!(err.exit_code(), exitcode::NOINPUT);
        assert_eq!(err.to_string(), "machine not found: ghost");
    }

    #[test]
    fn given_io_failure_when_mapping_exit_code_then_ioerr() {
        let err = CliError::from(ApplicationError::OperationFailed {
            context: "read inventory: x".into(),
            source: Box::new(std::io::Error::new(std::io::ErrorKind::NotFound, "x")),
        });
        assert_eq!(err.exit_code(), exitcode::IOERR);
    }

    #[test]
    fn given_bad_inventory_when_mapping_exit_code_then_dataerr() {
        let err = CliError::from(ApplicationError::Inventory {
            path: "inv.toml".into(),
            message: "missing field `name`".into(),
        });
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }
}
