use chrono::prelude::*;
use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::deadlines::calendars::{is_weekend, DateRoll, RecessCal};
use crate::deadlines::{DeadlineRequest, Term};

/// Hard cap on the number of emitted records.
///
/// Guarantees termination of [`day_sequence`] when a caller supplies an
/// inconsistent start and end pair; it is not a domain rule.
pub const MAX_SEQUENCE_DAYS: usize = 400;

/// Classification of a single day of a rendered deadline window.
///
/// Exactly one kind applies per day; see [`day_sequence`] for the precedence.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum DayKind {
    /// Filler day, before the start or after the end of the window.
    Empty,
    /// Day within the window without special classification.
    Normal,
    /// Saturday or Sunday.
    Weekend,
    /// Cantonal public holiday.
    Holiday,
    /// Day within a judicial recess.
    CourtRecess,
    /// The final day of the deadline.
    LastDay,
}

/// A single day of a rendered deadline window.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The calendar date.
    pub date: NaiveDateTime,
    /// Classification used by the renderer.
    pub kind: DayKind,
    /// Running day count within the window; `None` on filler days.
    pub ordinal: Option<u32>,
}

/// Build the classified, week-aligned day sequence of a deadline window for
/// rendering.
///
/// The sequence starts on the Monday on or before the start date and runs up
/// to, but not including, the first Monday strictly after `end`, so the
/// window always closes with a completed week. Each day is classified by the
/// first matching rule:
///
/// 1. [`DayKind::Empty`] — before the start date or after `end`,
/// 2. [`DayKind::LastDay`] — equals `end`,
/// 3. [`DayKind::CourtRecess`] — recess rules apply and the day lies in a recess,
/// 4. [`DayKind::Weekend`] — Saturday or Sunday,
/// 5. [`DayKind::Holiday`] — contained in `holiday_cal`,
/// 6. [`DayKind::Normal`] — otherwise.
///
/// The ordinal counts every non-filler day in day order. For day-denominated
/// terms the start date is excluded from the count (service day is day zero,
/// the following day is day one, Art. 142 Abs. 1 ZPO); for month terms the
/// start date is included.
pub fn day_sequence<T: DateRoll>(
    request: &DeadlineRequest,
    end: &NaiveDateTime,
    holiday_cal: &T,
    recess: &RecessCal,
) -> Vec<CalendarDay> {
    let mut days: Vec<CalendarDay> = Vec::new();

    // align on the Monday on or before the start date
    let mut current = request.start;
    while current.weekday() != Weekday::Mon {
        current = current - Days::new(1);
    }

    let count_start_day = matches!(request.term, Term::Months { .. });
    let mut ordinal: u32 = 0;

    while current <= *end || current.weekday() != Weekday::Mon {
        let kind = classify(request, &current, end, holiday_cal, recess);

        if kind != DayKind::Empty && (count_start_day || current != request.start) {
            ordinal += 1;
        }

        days.push(CalendarDay {
            date: current,
            kind,
            ordinal: if kind == DayKind::Empty {
                None
            } else {
                Some(ordinal)
            },
        });

        if days.len() >= MAX_SEQUENCE_DAYS {
            break;
        }
        current = current + Days::new(1);
    }
    days
}

fn classify<T: DateRoll>(
    request: &DeadlineRequest,
    day: &NaiveDateTime,
    end: &NaiveDateTime,
    holiday_cal: &T,
    recess: &RecessCal,
) -> DayKind {
    if *day < request.start || *day > *end {
        DayKind::Empty
    } else if day == end {
        DayKind::LastDay
    } else if request.court_recess && recess.is_recess(day) {
        DayKind::CourtRecess
    } else if is_weekend(day) {
        DayKind::Weekend
    } else if holiday_cal.is_holiday(day) {
        DayKind::Holiday
    } else {
        DayKind::Normal
    }
}
