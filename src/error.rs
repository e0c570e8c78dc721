//! Process-level error type.
//!
//! Validation problems are *not* errors here: they are per-field messages
//! carried by `domain::FieldErrors`. `AppError` covers the failures that end
//! the process: bad usage, unwritable export paths, terminal setup.
//!
//! Exit code convention:
//!
//! - `2` = input/usage error (failed validation in `cvr calc`, bad paths)
//! - `4` = environment error (terminal init, draw/event failures)

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Input/usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// Environment error, e.g. terminal setup (exit code 4).
    pub fn environment(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
