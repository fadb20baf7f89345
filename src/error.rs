//! Error type for XVG parsing.

/// Errors surfaced while reading an XVG input.
///
/// Header errors abort the parse at the offending line; data errors are
/// detected when the accumulated rows are assembled into the matrix, so a
/// failed parse never exposes a partial dataset.
#[derive(Debug, thiserror::Error)]
pub enum XvgError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directive '{directive}' is missing a required argument")]
    MissingArgument { directive: String },

    #[error("Empty '@' directive line")]
    EmptyDirective,

    #[error("Data row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Data row {row}, field {column}: '{token}' is not a number")]
    InvalidNumber {
        row: usize,
        column: usize,
        token: String,
    },
}

/// Result alias for XVG operations.
pub type Result<T> = std::result::Result<T, XvgError>;
