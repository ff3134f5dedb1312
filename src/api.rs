//! HTTP client for the remote timesheet API. Implements both source
//! traits against the same backend: the calendar endpoint carries day
//! classification and logged entries in one payload.

use crate::config::Config;
use crate::error::{Result, TimesheetError};
use crate::models::{DayStatus, LogOutcome, LogTimeRequest, Project, TimeEntry};
use crate::sources::{CalendarSource, TimeEntrySource};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info};

const CALENDAR_SOURCE: &str = "calendar source";
const ENTRY_SOURCE: &str = "time entry source";
const PROJECT_SOURCE: &str = "project source";

pub struct InsiderClient {
    http: reqwest::Client,
    config: Config,
}

/// One day record from the timesheet calendar endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarDayDto {
    log_date: String,
    #[serde(default)]
    is_normal_working_day: bool,
    #[serde(default)]
    is_public_holiday: bool,
    #[serde(default)]
    log_times: Vec<LogTimeDto>,
}

impl CalendarDayDto {
    /// The date part of `logDate`, which arrives as an ISO timestamp.
    fn date(&self) -> Option<NaiveDate> {
        let prefix = self.log_date.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogTimeDto {
    #[serde(default)]
    project_name: String,
    #[serde(default)]
    hours: crate::models::Hours,
    #[serde(default)]
    comment: String,
}

#[derive(Debug, Deserialize)]
struct ProjectDto {
    id: i64,
    name: String,
}

impl InsiderClient {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("timesheet-mcp/0.1")
            .build()
            .map_err(|cause| TimesheetError::SourceUnavailable {
                source_name: ENTRY_SOURCE,
                cause,
            })?;
        Ok(InsiderClient { http, config })
    }

    /// Fetch all projects for the configured user.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let url = format!(
            "{}/project/get-basic/user/{}",
            self.config.base_url, self.config.user_id
        );
        debug!(%url, "fetching projects");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.auth_token)
            .send()
            .await
            .map_err(|cause| TimesheetError::SourceUnavailable {
                source_name: PROJECT_SOURCE,
                cause,
            })?;
        let response = check_status(response, PROJECT_SOURCE).await?;

        let dtos: Vec<ProjectDto> =
            response
                .json()
                .await
                .map_err(|cause| TimesheetError::SourceUnavailable {
                    source_name: PROJECT_SOURCE,
                    cause,
                })?;
        Ok(dtos
            .into_iter()
            .map(|dto| Project {
                id: dto.id,
                name: dto.name,
            })
            .collect())
    }

    async fn fetch_calendar(
        &self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<CalendarDayDto>> {
        let url = format!(
            "{}/timesheet/{}/timesheetCalendar/{}/{}",
            self.config.base_url, self.config.emp_code, first, last
        );
        debug!(%url, "fetching timesheet calendar");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.auth_token)
            .send()
            .await
            .map_err(|cause| TimesheetError::SourceUnavailable {
                source_name: CALENDAR_SOURCE,
                cause,
            })?;
        let response = check_status(response, CALENDAR_SOURCE).await?;

        response
            .json()
            .await
            .map_err(|cause| TimesheetError::SourceUnavailable {
                source_name: CALENDAR_SOURCE,
                cause,
            })
    }
}

#[async_trait]
impl CalendarSource for InsiderClient {
    async fn day_status(&self, date: NaiveDate) -> Result<DayStatus> {
        let days = self.fetch_calendar(date, date).await?;
        // Days the API does not report are treated as non-working: nothing
        // is expected on them, so an absent record stays compliant.
        Ok(days
            .into_iter()
            .find(|day| day.date() == Some(date))
            .map(|day| DayStatus {
                date,
                is_working_day: day.is_normal_working_day,
                is_holiday: day.is_public_holiday,
            })
            .unwrap_or(DayStatus {
                date,
                is_working_day: false,
                is_holiday: false,
            }))
    }
}

#[async_trait]
impl TimeEntrySource for InsiderClient {
    async fn entries_between(&self, first: NaiveDate, last: NaiveDate) -> Result<Vec<TimeEntry>> {
        let days = self.fetch_calendar(first, last).await?;
        let mut entries = Vec::new();
        for day in days {
            let Some(date) = day.date() else { continue };
            for log in day.log_times {
                entries.push(TimeEntry {
                    project_name: log.project_name,
                    hours: log.hours,
                    comment: log.comment,
                    date,
                });
            }
        }
        Ok(entries)
    }

    async fn submit(&self, request: &LogTimeRequest, date: NaiveDate) -> Result<LogOutcome> {
        let url = format!("{}/timesheet/add", self.config.base_url);
        let payload = json!({
            "userId": self.config.user_id,
            "empCode": self.config.emp_code,
            "logDate": date.to_string(),
            "hours": request.hours.to_f64(),
            "hourRate": request.hour_rate.code(),
            "activity": request.activity.code(),
            "projectId": request.project_id,
            "inquiryId": null,
            "milestoneId": null,
            "comment": request.comment,
        });
        info!(project_id = request.project_id, %date, "submitting time entry");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.auth_token)
            .json(&payload)
            .send()
            .await
            .map_err(|cause| TimesheetError::SourceUnavailable {
                source_name: ENTRY_SOURCE,
                cause,
            })?;
        check_status(response, ENTRY_SOURCE).await?;

        Ok(LogOutcome {
            project_id: request.project_id,
            date,
        })
    }
}

/// Turn a non-2xx response into a SourceRejected error, pulling the API's
/// `message` field out of the body when it has one.
async fn check_status(
    response: reqwest::Response,
    source_name: &'static str,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or(body);
    error!(%source_name, status = status.as_u16(), %message, "request rejected");

    Err(TimesheetError::SourceRejected {
        source_name,
        status: status.as_u16(),
        message,
    })
}
