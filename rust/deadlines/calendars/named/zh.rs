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

//! Define the holiday calendar of the canton of Zurich.

use chrono::{Days, NaiveDateTime};

use crate::deadlines::calendars::{easter_sunday, ndt};

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

/// Zurich public holidays for a single year.
pub(crate) fn holidays(year: i32) -> Vec<NaiveDateTime> {
    let easter = easter_sunday(year);
    vec![
        ndt(year, 1, 1),        // New Year's Day
        ndt(year, 1, 2),        // Berchtoldstag
        easter - Days::new(2),  // Good Friday
        easter + Days::new(1),  // Easter Monday
        ndt(year, 5, 1),        // Labour Day
        easter + Days::new(39), // Ascension Thursday
        easter + Days::new(50), // Whit Monday
        ndt(year, 8, 1),        // National Day
        ndt(year, 12, 25),      // Christmas Day
        ndt(year, 12, 26),      // St. Stephen's Day
    ]
}
