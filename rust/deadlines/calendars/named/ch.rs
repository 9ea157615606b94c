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

//! Define the Swiss federal holiday calendar: only the holidays observed in
//! every canton.

use chrono::{Days, NaiveDateTime};

use crate::deadlines::calendars::{easter_sunday, ndt};

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

/// Federal holidays for a single year.
pub(crate) fn holidays(year: i32) -> Vec<NaiveDateTime> {
    let easter = easter_sunday(year);
    vec![
        ndt(year, 1, 1),        // New Year's Day
        easter + Days::new(39), // Ascension Thursday
        ndt(year, 8, 1),        // National Day
        ndt(year, 12, 25),      // Christmas Day
    ]
}
