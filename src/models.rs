use crate::error::{Result, TimesheetError};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Logged hours as a fixed-point count of hundredths of an hour.
///
/// Compliance hinges on exact equality between logged and expected hours,
/// so hours are never compared as binary floats. Values convert from f64
/// once at the boundary, rounded to the nearest hundredth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hours(i64);

impl Hours {
    pub const ZERO: Hours = Hours(0);
    /// Expected total on a normal working day.
    pub const FULL_DAY: Hours = Hours(800);
    /// Smallest amount accepted by a log-time request.
    pub const MIN_LOGGABLE: Hours = Hours(50);

    pub fn from_f64(value: f64) -> Hours {
        Hours((value * 100.0).round() as i64)
    }

    pub fn from_centihours(centihours: i64) -> Hours {
        Hours(centihours)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Add for Hours {
    type Output = Hours;
    fn add(self, rhs: Hours) -> Hours {
        Hours(self.0 + rhs.0)
    }
}

impl AddAssign for Hours {
    fn add_assign(&mut self, rhs: Hours) {
        self.0 += rhs.0;
    }
}

impl Sub for Hours {
    type Output = Hours;
    fn sub(self, rhs: Hours) -> Hours {
        Hours(self.0 - rhs.0)
    }
}

impl Neg for Hours {
    type Output = Hours;
    fn neg(self) -> Hours {
        Hours(-self.0)
    }
}

impl Sum for Hours {
    fn sum<I: Iterator<Item = Hours>>(iter: I) -> Hours {
        iter.fold(Hours::ZERO, |acc, h| acc + h)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = self.0.abs() / 100;
        let frac = self.0.abs() % 100;
        if frac % 10 == 0 {
            write!(f, "{sign}{whole}.{}", frac / 10)
        } else {
            write!(f, "{sign}{whole}.{frac:02}")
        }
    }
}

impl Serialize for Hours {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Hours {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Hours::from_f64(value))
    }
}

/// Hour rate codes accepted by the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourRate {
    Standard,
    OvertimeWeekday,
    OvertimeWeekend,
    OvertimeHoliday,
}

impl HourRate {
    pub fn from_code(code: u8) -> Result<HourRate> {
        match code {
            1 => Ok(HourRate::Standard),
            2 => Ok(HourRate::OvertimeWeekday),
            3 => Ok(HourRate::OvertimeWeekend),
            4 => Ok(HourRate::OvertimeHoliday),
            other => Err(TimesheetError::UnknownHourRate(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            HourRate::Standard => 1,
            HourRate::OvertimeWeekday => 2,
            HourRate::OvertimeWeekend => 3,
            HourRate::OvertimeHoliday => 4,
        }
    }
}

/// Activity codes accepted by the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Code,
    Test,
}

impl Activity {
    pub fn from_code(code: u8) -> Result<Activity> {
        match code {
            1 => Ok(Activity::Code),
            2 => Ok(Activity::Test),
            other => Err(TimesheetError::UnknownActivity(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Activity::Code => 1,
            Activity::Test => 2,
        }
    }
}

/// A single logged time entry, as returned by the time entry source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub project_name: String,
    pub hours: Hours,
    pub comment: String,
    pub date: NaiveDate,
}

/// Working-day classification of a calendar date, as returned by the calendar source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub is_working_day: bool,
    pub is_holiday: bool,
}

impl DayStatus {
    /// A day expects 8 logged hours iff it is a working day and not a holiday.
    pub fn is_normal_working_day(&self) -> bool {
        self.is_working_day && !self.is_holiday
    }

    pub fn expected_hours(&self) -> Hours {
        if self.is_normal_working_day() {
            Hours::FULL_DAY
        } else {
            Hours::ZERO
        }
    }
}

/// A day whose logged hours deviate from the expected norm
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidDay {
    pub date: NaiveDate,
    pub current_hours: Hours,
    pub expected_hours: Hours,
    /// Expected minus current; negative means time was logged where none was expected.
    pub shortfall_hours: Hours,
    pub is_working_day: bool,
    pub is_holiday: bool,
    pub issue: String,
    pub entries: Vec<TimeEntry>,
}

/// Result of a full-month compliance check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCompliance {
    pub year: i32,
    pub month: u32,
    pub invalid_days: Vec<InvalidDay>,
}

impl MonthCompliance {
    pub fn month_label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// A project the user may log time against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

/// A fully validated, normalized log-time submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTimeRequest {
    pub project_id: i64,
    pub hours: Hours,
    pub dates: Vec<NaiveDate>,
    pub hour_rate: HourRate,
    pub activity: Activity,
    pub comment: String,
}

/// Receipt for one submitted date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogOutcome {
    pub project_id: i64,
    pub date: NaiveDate,
}
