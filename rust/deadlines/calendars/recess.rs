use chrono::prelude::*;
use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::deadlines::calendars::{easter_sunday, ndt};

/// A single judicial-recess period.
///
/// Deadlines in ordinary proceedings stand still during the recess
/// (Art. 145 Abs. 1 ZPO) and a document served within one is deemed served on
/// its `following_day` (Art. 146 Abs. 1 ZPO).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecessWindow {
    /// First day of the recess, inclusive.
    pub start: NaiveDateTime,
    /// Last day of the recess, inclusive.
    pub end: NaiveDateTime,
    /// First day after the recess ends.
    pub following_day: NaiveDateTime,
}

impl RecessWindow {
    fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        RecessWindow {
            start,
            end,
            following_day: end + Days::new(1),
        }
    }

    /// Returns whether `date` lies within the recess, bounds inclusive.
    pub fn contains(&self, date: &NaiveDateTime) -> bool {
        self.start <= *date && *date <= self.end
    }
}

/// The judicial-recess calendar of Art. 145 Abs. 1 ZPO.
///
/// Three fixed windows open in every year:
///
/// - the Easter recess, from the seventh day before Easter Sunday until the
///   seventh day after it,
/// - the summer recess, 15th July until 15th August,
/// - the winter recess, 18th December until 2nd January of the following year.
///
/// The calendar holds no state; windows are derived on demand from the year
/// of the queried date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecessCal {}

impl RecessCal {
    /// Create a new [`RecessCal`].
    pub fn new() -> Self {
        RecessCal {}
    }

    /// Return the three recess windows opening in `year`.
    ///
    /// The winter window runs over the year boundary; its `end` and
    /// `following_day` fall in `year + 1`.
    pub fn windows(&self, year: i32) -> [RecessWindow; 3] {
        let easter = easter_sunday(year);
        [
            RecessWindow::new(easter - Days::new(7), easter + Days::new(7)),
            RecessWindow::new(ndt(year, 7, 15), ndt(year, 8, 15)),
            RecessWindow::new(ndt(year, 12, 18), ndt(year + 1, 1, 2)),
        ]
    }

    /// Return the recess window containing `date`, if any.
    ///
    /// The winter window must be found from both sides of the year boundary:
    /// a December date belongs to the window opening that year, a date on
    /// 1st or 2nd January to the window opened the year before.
    pub fn window_containing(&self, date: &NaiveDateTime) -> Option<RecessWindow> {
        let prior_winter = self.windows(date.year() - 1)[2];
        self.windows(date.year())
            .into_iter()
            .chain([prior_winter])
            .find(|w| w.contains(date))
    }

    /// Returns whether `date` falls within a judicial recess.
    pub fn is_recess(&self, date: &NaiveDateTime) -> bool {
        self.window_containing(date).is_some()
    }

    /// Return the first day after the recess that `date` falls in, or `None`
    /// if `date` lies outside every recess window.
    ///
    /// This is the deemed service date of Art. 146 Abs. 1 ZPO: a document
    /// served during a recess is treated as served on the first day after
    /// the recess ends.
    pub fn recess_following_day(&self, date: &NaiveDateTime) -> Option<NaiveDateTime> {
        self.window_containing(date).map(|w| w.following_day)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_2025() {
        let cal = RecessCal::new();
        let [easter, summer, winter] = cal.windows(2025);

        // Easter Sunday 2025 is 20th April
        assert_eq!(ndt(2025, 4, 13), easter.start);
        assert_eq!(ndt(2025, 4, 27), easter.end);
        assert_eq!(ndt(2025, 4, 28), easter.following_day);

        assert_eq!(ndt(2025, 7, 15), summer.start);
        assert_eq!(ndt(2025, 8, 15), summer.end);
        assert_eq!(ndt(2025, 8, 16), summer.following_day);

        assert_eq!(ndt(2025, 12, 18), winter.start);
        assert_eq!(ndt(2026, 1, 2), winter.end);
        assert_eq!(ndt(2026, 1, 3), winter.following_day);
    }

    #[test]
    fn test_is_recess() {
        let cal = RecessCal::new();
        assert!(cal.is_recess(&ndt(2025, 4, 13)));
        assert!(cal.is_recess(&ndt(2025, 4, 20)));
        assert!(cal.is_recess(&ndt(2025, 4, 27)));
        assert!(!cal.is_recess(&ndt(2025, 4, 12)));
        assert!(!cal.is_recess(&ndt(2025, 4, 28)));

        assert!(cal.is_recess(&ndt(2025, 7, 15)));
        assert!(cal.is_recess(&ndt(2025, 8, 15)));
        assert!(!cal.is_recess(&ndt(2025, 7, 14)));
        assert!(!cal.is_recess(&ndt(2025, 8, 16)));

        assert!(cal.is_recess(&ndt(2025, 12, 18)));
        assert!(cal.is_recess(&ndt(2025, 12, 31)));
        assert!(!cal.is_recess(&ndt(2025, 12, 17)));
    }

    #[test]
    fn test_is_recess_january_tail() {
        // 1st and 2nd January belong to the window opened the prior December.
        let cal = RecessCal::new();
        assert!(cal.is_recess(&ndt(2026, 1, 1)));
        assert!(cal.is_recess(&ndt(2026, 1, 2)));
        assert!(!cal.is_recess(&ndt(2026, 1, 3)));
    }

    #[test]
    fn test_recess_following_day() {
        let cal = RecessCal::new();
        assert_eq!(
            Some(ndt(2025, 4, 28)),
            cal.recess_following_day(&ndt(2025, 4, 20))
        );
        assert_eq!(
            Some(ndt(2025, 8, 16)),
            cal.recess_following_day(&ndt(2025, 7, 20))
        );
        assert_eq!(
            Some(ndt(2026, 1, 3)),
            cal.recess_following_day(&ndt(2025, 12, 24))
        );
        assert_eq!(None, cal.recess_following_day(&ndt(2025, 6, 2)));
    }

    #[test]
    fn test_recess_following_day_january_tail() {
        // Queried from the January side the winter window still ends on the
        // 3rd of the same year.
        let cal = RecessCal::new();
        assert_eq!(
            Some(ndt(2026, 1, 3)),
            cal.recess_following_day(&ndt(2026, 1, 1))
        );
        assert_eq!(
            Some(ndt(2026, 1, 3)),
            cal.recess_following_day(&ndt(2026, 1, 2))
        );
    }
}
