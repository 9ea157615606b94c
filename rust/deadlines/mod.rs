//! Compute statutory deadlines and deadline calendars under the Swiss Code of
//! Civil Procedure (ZPO).
//!
//! The purpose of this module is to provide the arithmetic behind a deadline
//! calculator for laypersons and legal professionals:
//! - Day and month denominated deadlines with end-of-month clamping
//!   (Art. 142 Abs. 1 and 2).
//! - Weekend adjustment of the final day (Art. 142 Abs. 3).
//! - Suspension of deadlines during the judicial recess (Art. 145).
//! - Deemed service when a document arrives during a recess (Art. 146).
//! - A classified, week-aligned day sequence over the deadline window for
//!   downstream rendering.
//!
//! # Calendars
//!
//! Two calendar types answer the date queries above. A [`Cal`] is a plain
//! weekday and public-holiday calendar; pre-defined Swiss calendars are
//! available by name via [`get_calendar_by_name`]. A [`RecessCal`] locates
//! the three fixed judicial-recess windows of a year, one of which is pinned
//! to Easter Sunday (computed by [`easter_sunday`]).
//!
//! ### Example
//! This example looks up the Zurich calendar and queries the recess calendar
//! around Easter 2025 (20th April).
//! ```rust
//! # use fristlib::deadlines::{get_calendar_by_name, ndt, DateRoll, RecessCal};
//! let cal = get_calendar_by_name("zh").unwrap();
//! assert!(cal.is_holiday(&ndt(2025, 1, 1)));
//!
//! let recess = RecessCal::new();
//! assert!(recess.is_recess(&ndt(2025, 4, 13)));
//! assert_eq!(Some(ndt(2025, 4, 28)), recess.recess_following_day(&ndt(2025, 4, 20)));
//! ```
//!
//! # Deadlines
//!
//! A [`DeadlineRequest`] couples a service date with a [`Term`] and states
//! whether the recess rules apply to the proceedings. Its
//! [`expiry`](DeadlineRequest::expiry) is computed in a fixed sequence of
//! stages and is never a Saturday or Sunday.
//!
//! ### Example
//! A ten day deadline served on 10th July 2025 runs into the summer recess:
//! six suspended days push the raw end from the 20th to Saturday the 26th,
//! which expires on Monday the 28th.
//! ```rust
//! # use fristlib::deadlines::{ndt, DeadlineRequest, RecessCal, Term};
//! let request = DeadlineRequest::new(ndt(2025, 7, 10), Term::Days { number: 10 }, true);
//! assert_eq!(ndt(2025, 7, 28), request.expiry(&RecessCal::new()));
//! ```
//!
//! # Day sequences
//!
//! [`day_sequence`] classifies every day of the deadline window for a
//! renderer, using the same calendar queries as the arithmetic above so the
//! two can never drift apart.
//! ```rust
//! # use fristlib::deadlines::{day_sequence, ndt, Cal, DayKind, DeadlineRequest, RecessCal, Term};
//! let request = DeadlineRequest::new(ndt(2025, 1, 6), Term::Days { number: 10 }, false);
//! let recess = RecessCal::new();
//! let end = request.expiry(&recess);
//! let days = day_sequence(&request, &end, &Cal::new(vec![], vec![5, 6]), &recess);
//! assert_eq!(DayKind::LastDay, days[10].kind);
//! assert_eq!(Some(10), days[10].ordinal);
//! ```

mod calendars;
mod deadline;
mod limitation;
mod sequence;
mod term;

mod serde;

pub use crate::deadlines::{
    calendars::{
        cal_date_range, easter_sunday, get_calendar_by_name, is_weekend, ndt, next_non_weekend,
        Cal, CalendarError, DateRoll, RecessCal, RecessWindow,
    },
    deadline::DeadlineRequest,
    limitation::LimitationRequest,
    sequence::{day_sequence, CalendarDay, DayKind, MAX_SEQUENCE_DAYS},
    term::{add_months, is_leap_year, last_day_of_month, Term},
};
