use thiserror::Error;

/// Represents failures converting a parsed source record into normalized rows.
///
/// These are row-local: one bad day range or timestamp skips that row only,
/// never the rest of the record or the pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("malformed hours range `{0}`")]
    MalformedHoursRange(String),

    #[error("invalid time `{0}`")]
    InvalidTime(String),

    #[error("invalid timestamp `{0}`")]
    InvalidTimestamp(String),
}
