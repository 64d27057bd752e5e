//! Reporting period value object.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// An inclusive date range used to scope score records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportingPeriod {
    /// Creates a period, rejecting an end date before the start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::invalid_format(
                "period",
                "end date precedes start date",
            ));
        }
        Ok(Self { start, end })
    }

    /// Creates the period spanning a calendar month.
    ///
    /// Returns `None` for an invalid year/month combination.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = start
            .checked_add_months(Months::new(1))?
            .checked_sub_days(Days::new(1))?;
        Some(Self { start, end })
    }

    /// Creates the period spanning a calendar quarter (1-4).
    pub fn quarter(year: i32, quarter: u32) -> Option<Self> {
        if !(1..=4).contains(&quarter) {
            return None;
        }
        let start = NaiveDate::from_ymd_opt(year, (quarter - 1) * 3 + 1, 1)?;
        let end = start
            .checked_add_months(Months::new(3))?
            .checked_sub_days(Days::new(1))?;
        Some(Self { start, end })
    }

    /// Returns the first day of the period.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the period.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks whether a date falls inside the period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
