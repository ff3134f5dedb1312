use crate::error::Result;
use crate::models::{DayStatus, LogOutcome, LogTimeRequest, TimeEntry};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Reports whether a given date is a working day or holiday.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    async fn day_status(&self, date: NaiveDate) -> Result<DayStatus>;
}

/// Returns raw logged entries for a date range and accepts new submissions.
#[async_trait]
pub trait TimeEntrySource: Send + Sync {
    async fn entries_between(&self, first: NaiveDate, last: NaiveDate) -> Result<Vec<TimeEntry>>;

    async fn submit(&self, request: &LogTimeRequest, date: NaiveDate) -> Result<LogOutcome>;
}

/// Submit a validated request for each of its dates, in order.
///
/// The request has already passed validation as a whole; each date is then
/// submitted independently, and the first source failure aborts the rest.
pub async fn submit_all(
    source: &dyn TimeEntrySource,
    request: &LogTimeRequest,
) -> Result<Vec<LogOutcome>> {
    let mut outcomes = Vec::with_capacity(request.dates.len());
    for &date in &request.dates {
        outcomes.push(source.submit(request, date).await?);
    }
    Ok(outcomes)
}
