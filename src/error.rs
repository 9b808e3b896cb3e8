//! Error types for menuwire.

use thiserror::Error;

/// Main error type for all menuwire operations.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Malformed input at a construction boundary (e.g. a response that
    /// claims dismissal but still carries an option index).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A response referenced an option position that does not exist.
    ///
    /// Fatal to the single event that carried it; menu state is left
    /// untouched and the dispatch loop keeps running.
    #[error("option index {index} out of range for menu with {len} options")]
    IndexOutOfRange {
        /// The index the response asked for.
        index: usize,
        /// The number of options the menu actually has.
        len: usize,
    },
}

/// Result type alias using MenuError.
pub type Result<T> = std::result::Result<T, MenuError>;
