use chrono::prelude::*;
use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::deadlines::calendars::ndt;

/// The length of a procedural deadline.
///
/// Deadlines are set either as a number of calendar days (Art. 142 Abs. 1
/// ZPO) or as a number of months (Art. 142 Abs. 2 ZPO). Day counts and month
/// counts are non-negative by construction; zero is permitted and leaves the
/// start date unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Term {
    /// A number of calendar days. The day of service itself is not counted
    /// (Art. 142 Abs. 1: the deadline starts running the following day).
    Days { number: u32 },
    /// A number of months, ending on the day of the target month with the
    /// same number as the start day, clamped into shorter months.
    Months { number: u32 },
}

impl Term {
    /// Return the unadjusted end date of a term beginning at `start`.
    ///
    /// No recess or weekend adjustment is applied here; see
    /// [`DeadlineRequest::expiry`](crate::deadlines::DeadlineRequest::expiry).
    pub fn unadjusted_end(&self, start: &NaiveDateTime) -> NaiveDateTime {
        match self {
            Term::Days { number } => *start + Days::new(u64::from(*number)),
            Term::Months { number } => add_months(start, *number),
        }
    }
}

/// Add a number of months to a date, clamping the day into the target month.
///
/// A deadline starting on the 31st that ends in a month with fewer days falls
/// on that month's last day (BGer 5A_691/2023), e.g. 31st January plus one
/// month is the 28th or, in a leap year, the 29th of February.
pub fn add_months(date: &NaiveDateTime, months: u32) -> NaiveDateTime {
    let month0 = date.month0() + months;
    let year = date.year() + i32::try_from(month0 / 12).unwrap();
    let month = month0 % 12 + 1;
    let day = u32::min(date.day(), last_day_of_month(year, month));
    ndt(year, month, day)
}

/// Return the number of the last calendar day of a given month.
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let mut day = 31;
    while NaiveDate::from_ymd_opt(year, month, day).is_none() {
        day -= 1;
    }
    day
}

/// Test whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
