use crate::models::Hours;
use thiserror::Error;

/// Coarse error classification surfaced to tool callers as a stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Validation,
    SourceUnavailable,
    Computation,
}

impl ErrorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClass::Validation => "ValidationError",
            ErrorClass::SourceUnavailable => "SourceUnavailableError",
            ErrorClass::Computation => "ComputationError",
        }
    }
}

/// All possible errors in the timesheet checker
#[derive(Error, Debug)]
pub enum TimesheetError {
    #[error("year must be between 2020 and {max}, got {year}")]
    YearOutOfRange { year: i32, max: i32 },

    #[error("month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),

    #[error("hours must be between 0.5 and 8.0, got {0}")]
    HoursOutOfRange(Hours),

    #[error("logDates must contain at least one date")]
    NoDates,

    #[error("logDates entry {0:?} is not a valid YYYY-MM-DD date")]
    BadDate(String),

    #[error(
        "hourRate must be 1 (normal), 2 (OT weekday), 3 (OT weekend) or 4 (OT holiday), got {0}"
    )]
    UnknownHourRate(u8),

    #[error("activity must be 1 (Code) or 2 (Test), got {0}")]
    UnknownActivity(u8),

    #[error("Missing environment variable: {0}")]
    MissingCredential(&'static str),

    #[error("Environment variable {0} must be an integer user id")]
    MalformedUserId(&'static str),

    #[error("{source_name} request failed: {cause}")]
    SourceUnavailable {
        source_name: &'static str,
        #[source]
        cause: reqwest::Error,
    },

    #[error("{source_name} rejected the request ({status}): {message}")]
    SourceRejected {
        source_name: &'static str,
        status: u16,
        message: String,
    },

    #[error("calendar enumeration produced no days for {year}-{month:02}")]
    EmptyMonth { year: i32, month: u32 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TimesheetError {
    /// Which of the three caller-visible error classes this variant belongs to.
    pub fn class(&self) -> ErrorClass {
        match self {
            TimesheetError::YearOutOfRange { .. }
            | TimesheetError::MonthOutOfRange(_)
            | TimesheetError::HoursOutOfRange(_)
            | TimesheetError::NoDates
            | TimesheetError::BadDate(_)
            | TimesheetError::UnknownHourRate(_)
            | TimesheetError::UnknownActivity(_)
            | TimesheetError::MissingCredential(_)
            | TimesheetError::MalformedUserId(_) => ErrorClass::Validation,
            TimesheetError::SourceUnavailable { .. } | TimesheetError::SourceRejected { .. } => {
                ErrorClass::SourceUnavailable
            }
            TimesheetError::EmptyMonth { .. }
            | TimesheetError::Json(_)
            | TimesheetError::Io(_) => ErrorClass::Computation,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TimesheetError>;
