use thiserror::Error;

/// Failure raised when a caller supplies a structurally illegal value.
///
/// These are fail-fast errors: the caller is expected to fix the call, not
/// recover. Nothing in this crate retries or aggregates them.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("day of month must be 1..=31, or 0..=-30 counting back from month end, got {0}")]
    DayOfMonth(i64),
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("snapshot path {path:?} does not contain a \"/.snapshot/{name}\" segment")]
    SnapshotPathMismatch { name: String, path: String },
    #[error("invalid {what} {token:?}, valid values are: {valid}")]
    UnknownToken {
        what: &'static str,
        token: String,
        valid: String,
    },
}

pub(crate) fn check_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

pub(crate) fn unknown_token(
    what: &'static str,
    token: &str,
    valid: &[&str],
) -> ValidationError {
    ValidationError::UnknownToken {
        what,
        token: token.to_string(),
        valid: valid.join(", "),
    }
}
