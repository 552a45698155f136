//! Input validation errors for the calendar and matching core.
//!
//! Every function that turns backend JSON into typed records validates the
//! whole batch up front and fails with one of these variants. A failed batch
//! is never partially rendered: the grid layout depends on a consistent date
//! progression and a skipped record would silently shift every later cell.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    /// A calendar date that is not `YYYY-MM-DD` or does not exist.
    #[error("record {index}: invalid date '{value}'")]
    InvalidDate { index: usize, value: String },

    /// A day value that is negative, NaN or infinite.
    #[error("record {index}: invalid value {value} for {date}")]
    InvalidValue { index: usize, date: String, value: f64 },

    /// Dates must be strictly ascending; duplicates are rejected too.
    #[error("record {index}: date {date} does not follow {previous}")]
    OutOfOrder { index: usize, date: String, previous: String },

    #[error("record {index}: invalid timestamp '{value}'")]
    InvalidTimestamp { index: usize, value: String },

    #[error("record {index}: negative duration {seconds}s")]
    NegativeDuration { index: usize, seconds: i64 },
}

impl InputError {
    /// Returns the same error pointing at another record index.
    ///
    /// Single-value parsers report index 0; batch parsers re-anchor the error
    /// to the position of the offending record.
    pub fn at(self, index: usize) -> Self {
        match self {
            Self::InvalidDate { value, .. } => Self::InvalidDate { index, value },
            Self::InvalidValue { date, value, .. } => Self::InvalidValue { index, date, value },
            Self::OutOfOrder { date, previous, .. } => Self::OutOfOrder { index, date, previous },
            Self::InvalidTimestamp { value, .. } => Self::InvalidTimestamp { index, value },
            Self::NegativeDuration { seconds, .. } => Self::NegativeDuration { index, seconds },
        }
    }
}
