//! Upfront validation of log-time requests. A request only reaches the
//! time entry source once every field and every date in the batch has
//! passed; there is no partial submission from a half-valid batch.

use crate::error::{Result, TimesheetError};
use crate::models::{Activity, HourRate, Hours, LogTimeRequest};
use chrono::NaiveDate;

/// Validate and normalize a raw log-time request.
pub fn validate_log_request(
    project_id: i64,
    hours: f64,
    dates: &[String],
    hour_rate: u8,
    activity: u8,
    comment: Option<&str>,
) -> Result<LogTimeRequest> {
    let hours = Hours::from_f64(hours);
    if hours < Hours::MIN_LOGGABLE || hours > Hours::FULL_DAY {
        return Err(TimesheetError::HoursOutOfRange(hours));
    }

    if dates.is_empty() {
        return Err(TimesheetError::NoDates);
    }
    let mut parsed = Vec::with_capacity(dates.len());
    for raw in dates {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| TimesheetError::BadDate(raw.clone()))?;
        parsed.push(date);
    }

    let hour_rate = HourRate::from_code(hour_rate)?;
    let activity = Activity::from_code(activity)?;

    Ok(LogTimeRequest {
        project_id,
        hours,
        dates: parsed,
        hour_rate,
        activity,
        comment: comment.unwrap_or_default().to_string(),
    })
}
