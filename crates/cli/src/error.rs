//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use akyljer_client::ClientError;

/// Structured exit codes for akyljer-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Network, timeout, DNS or bad base URL. No HTTP status was received.
    ///
    /// Scripts may retry.
    ConnectionError = 3,

    /// HTTP 404, e.g. an unknown event or crop issue id.
    NotFound = 4,

    /// HTTP 400 or a response that does not match the expected shape.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// HTTP 502, 503 or 504.
    ///
    /// Scripts should back off and retry later.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Connection failures and 502-504 responses may succeed on a later attempt.
    pub const fn is_retryable(self) -> bool {
        matches!(self, ExitCode::ConnectionError | ExitCode::ServiceUnavailable)
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Transport(_) => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::InvalidResponse(_) => ExitCode::ValidationError,
            ClientError::Api { status: 400, .. } => ExitCode::ValidationError,

            ClientError::Api { status: 404, .. } => ExitCode::NotFound,

            ClientError::Api {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,

            ClientError::Api { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
