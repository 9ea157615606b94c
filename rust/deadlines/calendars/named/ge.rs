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

//! Define the holiday calendar of the canton of Geneva.

use chrono::prelude::*;
use chrono::Days;

use crate::deadlines::calendars::{easter_sunday, ndt};

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

/// Geneva public holidays for a single year.
pub(crate) fn holidays(year: i32) -> Vec<NaiveDateTime> {
    let easter = easter_sunday(year);
    vec![
        ndt(year, 1, 1),        // New Year's Day
        easter - Days::new(2),  // Good Friday
        easter + Days::new(1),  // Easter Monday
        easter + Days::new(39), // Ascension Thursday
        easter + Days::new(50), // Whit Monday
        ndt(year, 8, 1),        // National Day
        jeune_genevois(year),
        ndt(year, 12, 25),      // Christmas Day
        ndt(year, 12, 31),      // Restauration de la République
    ]
}

/// Jeûne genevois: the Thursday following the first Sunday of September.
fn jeune_genevois(year: i32) -> NaiveDateTime {
    let mut date = ndt(year, 9, 1);
    while date.weekday() != Weekday::Sun {
        date = date + Days::new(1);
    }
    date + Days::new(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jeune_genevois() {
        assert_eq!(ndt(2024, 9, 5), jeune_genevois(2024));
        assert_eq!(ndt(2025, 9, 11), jeune_genevois(2025));
        assert_eq!(ndt(2026, 9, 10), jeune_genevois(2026));
    }
}
