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

//! Rule data for pre-existing named Swiss holiday calendars.
//!
//! Holiday lists are derived per year from fixed calendar dates and Easter
//! offsets, rather than stored as literal date tables, since half of the
//! Swiss public holidays are Easter-relative.

pub mod be;
pub mod ch;
pub mod ge;
pub mod ti;
pub mod zh;

use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::deadlines::calendars::Cal;

/// First year for which named calendar holidays are generated.
pub(crate) const FIRST_YEAR: i32 = 2000;
/// Last year for which named calendar holidays are generated, inclusive.
pub(crate) const LAST_YEAR: i32 = 2050;

/// Error variants raised by calendar lookup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a name has no pre-defined calendar.
    #[error("'{0}' is not found in list of existing calendars.")]
    UnknownName(String),
}

type HolidayRule = fn(i32) -> Vec<NaiveDateTime>;

pub(crate) fn get_weekmask_by_name(name: &str) -> Result<Vec<u8>, CalendarError> {
    let hmap: HashMap<&str, &[u8]> = HashMap::from([
        ("ch", ch::WEEKMASK),
        ("zh", zh::WEEKMASK),
        ("be", be::WEEKMASK),
        ("ge", ge::WEEKMASK),
        ("ti", ti::WEEKMASK),
    ]);
    match hmap.get(name) {
        None => Err(CalendarError::UnknownName(name.to_string())),
        Some(value) => Ok(value.to_vec()),
    }
}

pub(crate) fn get_holidays_by_name(name: &str) -> Result<Vec<NaiveDateTime>, CalendarError> {
    let hmap: HashMap<&str, HolidayRule> = HashMap::from([
        ("ch", ch::holidays as HolidayRule),
        ("zh", zh::holidays as HolidayRule),
        ("be", be::holidays as HolidayRule),
        ("ge", ge::holidays as HolidayRule),
        ("ti", ti::holidays as HolidayRule),
    ]);
    match hmap.get(name) {
        None => Err(CalendarError::UnknownName(name.to_string())),
        Some(rule) => Ok((FIRST_YEAR..=LAST_YEAR).flat_map(|year| rule(year)).collect()),
    }
}

/// Return a pre-defined Swiss holiday [`Cal`] from a name.
///
/// Available names are `"ch"` (federal holidays only), `"zh"`, `"be"`,
/// `"ge"` and `"ti"`. Holiday lists cover the years 2000 to 2050.
///
/// # Examples
/// ```rust
/// # use fristlib::deadlines::{get_calendar_by_name, ndt, DateRoll};
/// let cal = get_calendar_by_name("ge").unwrap();
/// assert!(cal.is_holiday(&ndt(2025, 12, 31))); // Restauration de la République
/// ```
pub fn get_calendar_by_name(name: &str) -> Result<Cal, CalendarError> {
    let name_ = name.to_lowercase();
    Ok(Cal::new(
        get_holidays_by_name(&name_)?,
        get_weekmask_by_name(&name_)?,
    ))
}
