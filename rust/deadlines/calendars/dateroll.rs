// SPDX-License-Identifier: LicenseRef-Rateslib-Dual
//
// Copyright (c) 2026 Siffrorna Technology Limited
// This code cannot be used or copied externally
//
// Dual-licensed: Free Educational Licence or Paid Commercial Licence (commercial/professional use)
// Source-available, not open source.
//
// See LICENSE and https://rateslib.com/py/en/latest/i_licence.html for details,
// and/or contact info (at) rateslib (dot) com
////////////////////////////////////////////////////////////////////////////////////////////////////

use chrono::prelude::*;
use chrono::Days;

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("`year`, `month` `day` are invalid.")
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Returns whether the date falls on a Saturday or Sunday.
pub fn is_weekend(date: &NaiveDateTime) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Return the `date`, if not a weekend day, or the next date that is neither
/// a Saturday nor a Sunday.
///
/// Art. 142 Abs. 3 ZPO moves a deadline ending on a Saturday or Sunday to the
/// next working day. Public holidays are not skipped here; they participate
/// in day classification only.
pub fn next_non_weekend(date: &NaiveDateTime) -> NaiveDateTime {
    let mut new_date = *date;
    while is_weekend(&new_date) {
        new_date = new_date + Days::new(1);
    }
    new_date
}

/// Return a vector of calendar dates between a start and end, inclusive.
pub fn cal_date_range(start: &NaiveDateTime, end: &NaiveDateTime) -> Vec<NaiveDateTime> {
    let mut vec = Vec::new();
    let mut sample_date = *start;
    while sample_date <= *end {
        vec.push(sample_date);
        sample_date = sample_date + Days::new(1);
    }
    vec
}

/// Simple weekday and holiday queries on a calendar.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDateTime) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDateTime) -> bool;

    /// Returns whether the date is a working day, i.e. part of the working week and not a holiday.
    fn is_bus_day(&self, date: &NaiveDateTime) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }
}
