use chrono::prelude::*;
use chrono::Weekday;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::deadlines::calendars::DateRoll;

/// A weekday and public-holiday calendar with a singular list of holidays.
///
/// A calendar is formed of 2 components:
///
/// - `week_mask`: which defines the days of the week outside the general working week. In
///   Switzerland these are `[5, 6]` for Saturday and Sunday.
/// - `holidays`: which defines the specific public holidays of a canton, used for day
///   classification of a deadline window.
///
/// Pre-defined Swiss calendars are available via
/// [`get_calendar_by_name`](crate::deadlines::get_calendar_by_name).
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cal {
    pub(crate) holidays: IndexSet<NaiveDateTime>,
    pub(crate) week_mask: HashSet<Weekday>,
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide a vector of dates that are public holidays. `week_mask` is a vector of
    /// days (0=Mon,.., 6=Sun) that are excluded from the working week.
    pub fn new(holidays: Vec<NaiveDateTime>, week_mask: Vec<u8>) -> Self {
        Cal {
            holidays: IndexSet::from_iter(holidays),
            week_mask: HashSet::from_iter(
                week_mask.into_iter().map(|v| Weekday::try_from(v).unwrap()),
            ),
        }
    }
}

impl DateRoll for Cal {
    fn is_weekday(&self, date: &NaiveDateTime) -> bool {
        !self.week_mask.contains(&date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDateTime) -> bool {
        self.holidays.contains(date)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::deadlines::calendars::ndt;

    fn fixture_hol_cal() -> Cal {
        // Swiss National Day 2025 (Friday) and Christmas Day 2025 (Thursday)
        let hols = vec![ndt(2025, 8, 1), ndt(2025, 12, 25)];
        Cal::new(hols, vec![5, 6])
    }

    #[test]
    fn test_is_holiday() {
        let cal = fixture_hol_cal();
        assert!(cal.is_holiday(&ndt(2025, 8, 1))); // In hol list
        assert!(!cal.is_holiday(&ndt(2025, 8, 4))); // Not in hol list
        assert!(!cal.is_holiday(&ndt(2025, 8, 2))); // Saturday, not in hol list
    }

    #[test]
    fn test_is_weekday() {
        let cal = fixture_hol_cal();
        assert!(cal.is_weekday(&ndt(2025, 8, 1))); // Friday
        assert!(cal.is_weekday(&ndt(2025, 8, 4))); // Monday
        assert!(!cal.is_weekday(&ndt(2025, 8, 2))); // Saturday
        assert!(!cal.is_weekday(&ndt(2025, 8, 3))); // Sunday
    }

    #[test]
    fn test_is_business_day() {
        let cal = fixture_hol_cal();
        assert!(!cal.is_bus_day(&ndt(2025, 12, 25))); // Thursday in hol list
        assert!(cal.is_bus_day(&ndt(2025, 12, 23))); // Tuesday
        assert!(!cal.is_bus_day(&ndt(2025, 12, 27))); // Saturday
    }
}
