//! Error types for the salary engine.
//!
//! Every validation or persistence failure is reported as an [`EngineError`]
//! value. Rejected operations never leave partial state behind, so callers can
//! simply correct their input and retry.

use thiserror::Error;

/// The main error type for the salary engine.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::DuplicateName {
///     kind: "income item",
///     name: "Base Salary".to_string(),
/// };
/// assert_eq!(error.to_string(), "income item 'Base Salary' already exists");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A name was required but empty.
    #[error("{kind} name must not be empty")]
    EmptyName {
        /// What was being named (e.g. "income item").
        kind: &'static str,
    },

    /// A name starts with a prefix that flat input maps reserve.
    #[error("{kind} '{name}' must not start with '{prefix}'")]
    ReservedName {
        /// What was being named.
        kind: &'static str,
        /// The rejected name.
        name: String,
        /// The reserved prefix.
        prefix: &'static str,
    },

    /// A name collided with an existing entry.
    #[error("{kind} '{name}' already exists")]
    DuplicateName {
        /// What was being named.
        kind: &'static str,
        /// The colliding name.
        name: String,
    },

    /// A named entry does not exist.
    #[error("{kind} '{name}' not found")]
    NotFound {
        /// What was being looked up.
        kind: &'static str,
        /// The missing name.
        name: String,
    },

    /// A tax bracket index was outside the table.
    #[error("Tax bracket index {index} is out of range (table has {len} brackets)")]
    BracketIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of brackets in the table.
        len: usize,
    },

    /// The calculation method addressed by a mutation is not registered.
    #[error("Calculation method not registered: {method}")]
    MethodNotFound {
        /// The method identifier.
        method: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration text could not be parsed.
    #[error("Failed to parse configuration '{path}': {message}")]
    ConfigParseError {
        /// The source of the text (a file path or "<inline>").
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration could not be written.
    #[error("Failed to write configuration '{path}': {message}")]
    ConfigWriteError {
        /// The destination path.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// Configuration parsed but breaks a schema invariant.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the violated invariant.
        message: String,
    },

    /// The roster table could not be produced.
    #[error("Export error: {message}")]
    ExportError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
