use crate::error::{Result, TimesheetError};
use crate::models::{DayStatus, Hours, InvalidDay, MonthCompliance, TimeEntry};
use crate::sources::{CalendarSource, TimeEntrySource};
use chrono::{Datelike, NaiveDate, Utc};
use std::collections::HashMap;

/// Whether time logged on a non-working or holiday day counts as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExcessPolicy {
    /// Flag the day with a negative shortfall.
    #[default]
    Flag,
    /// Ignore it; only working-day shortfalls are reported.
    Ignore,
}

/// Core business logic: decides which days of a month deviate from the
/// 8-hours-per-working-day norm.
pub struct ComplianceChecker<'a> {
    calendar: &'a dyn CalendarSource,
    entries: &'a dyn TimeEntrySource,
    excess_policy: ExcessPolicy,
}

impl<'a> ComplianceChecker<'a> {
    pub fn new(calendar: &'a dyn CalendarSource, entries: &'a dyn TimeEntrySource) -> Self {
        ComplianceChecker {
            calendar,
            entries,
            excess_policy: ExcessPolicy::default(),
        }
    }

    pub fn with_excess_policy(mut self, policy: ExcessPolicy) -> Self {
        self.excess_policy = policy;
        self
    }

    /// Check every day of the given month against its expected hours.
    ///
    /// Inputs are validated before any source call. Invalid days come back
    /// in ascending date order; the first source failure aborts the whole
    /// check, so the result is never partial.
    pub async fn check_month(&self, year: i32, month: u32) -> Result<MonthCompliance> {
        validate_month_input(year, month)?;
        let (first, last) = month_bounds(year, month)?;

        let mut by_date: HashMap<NaiveDate, Vec<TimeEntry>> = HashMap::new();
        for entry in self.entries.entries_between(first, last).await? {
            by_date.entry(entry.date).or_default().push(entry);
        }

        let mut invalid_days = Vec::new();
        for day in 1..=last.day() {
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(TimesheetError::EmptyMonth { year, month })?;
            let status = self.calendar.day_status(date).await?;
            let entries = by_date.remove(&date).unwrap_or_default();
            if let Some(invalid) = evaluate_day(&status, entries, self.excess_policy) {
                invalid_days.push(invalid);
            }
        }

        Ok(MonthCompliance {
            year,
            month,
            invalid_days,
        })
    }
}

/// Reject out-of-range year/month before anything touches a source.
pub fn validate_month_input(year: i32, month: u32) -> Result<()> {
    let max = Utc::now().year() + 1;
    if year < 2020 || year > max {
        return Err(TimesheetError::YearOutOfRange { year, max });
    }
    if !(1..=12).contains(&month) {
        return Err(TimesheetError::MonthOutOfRange(month));
    }
    Ok(())
}

/// First and last calendar date of a month.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(TimesheetError::EmptyMonth { year, month })?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = next_month
        .and_then(|d| d.pred_opt())
        .ok_or(TimesheetError::EmptyMonth { year, month })?;
    Ok((first, last))
}

fn evaluate_day(
    status: &DayStatus,
    entries: Vec<TimeEntry>,
    policy: ExcessPolicy,
) -> Option<InvalidDay> {
    let current: Hours = entries.iter().map(|e| e.hours).sum();
    let expected = status.expected_hours();
    if current == expected {
        return None;
    }
    if !status.is_normal_working_day() && policy == ExcessPolicy::Ignore {
        return None;
    }

    let issue = if status.is_normal_working_day() {
        format!("Logged {current}h, expected {expected}h on a working day")
    } else {
        format!("Logged {current}h on a non-working day, expected none")
    };

    Some(InvalidDay {
        date: status.date,
        current_hours: current,
        expected_hours: expected,
        shortfall_hours: expected - current,
        is_working_day: status.is_working_day,
        is_holiday: status.is_holiday,
        issue,
        entries,
    })
}
