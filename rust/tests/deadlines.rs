//! Acceptance table for the deadline engine: the reference cases a Swiss
//! practitioner would check by hand, one tuple per case.

use crate::deadlines::{
    day_sequence, easter_sunday, get_calendar_by_name, is_weekend, ndt, DayKind, DeadlineRequest,
    RecessCal, Term,
};
use chrono::NaiveDateTime;

fn days(number: u32) -> Term {
    Term::Days { number }
}

fn months(number: u32) -> Term {
    Term::Months { number }
}

#[test]
fn day_terms() {
    // Art. 142 Abs. 1
    let options: Vec<(NaiveDateTime, Term, NaiveDateTime)> = vec![
        (ndt(2025, 1, 6), days(10), ndt(2025, 1, 16)), // Monday to Thursday
        (ndt(2025, 1, 6), days(20), ndt(2025, 1, 27)), // Sunday end rolled to Monday
        (ndt(2025, 1, 6), days(30), ndt(2025, 2, 5)),
    ];
    for option in options.iter() {
        let request = DeadlineRequest::new(option.0, option.1, false);
        assert_eq!(option.2, request.expiry(&RecessCal::new()));
    }
}

#[test]
fn month_terms() {
    // Art. 142 Abs. 2, clamping per BGer 5A_691/2023
    let options: Vec<(NaiveDateTime, Term, NaiveDateTime)> = vec![
        (ndt(2025, 1, 15), months(1), ndt(2025, 2, 17)), // Saturday end rolled to Monday
        (ndt(2025, 1, 31), months(1), ndt(2025, 2, 28)), // clamped
        (ndt(2024, 1, 31), months(1), ndt(2024, 2, 29)), // clamped, leap year
        (ndt(2025, 1, 15), months(3), ndt(2025, 4, 15)),
        (ndt(2025, 12, 15), months(1), ndt(2026, 1, 15)), // across the year boundary
    ];
    for option in options.iter() {
        let request = DeadlineRequest::new(option.0, option.1, false);
        assert_eq!(option.2, request.expiry(&RecessCal::new()));
    }
}

#[test]
fn weekend_ends() {
    // Art. 142 Abs. 3
    let options: Vec<(NaiveDateTime, Term, NaiveDateTime)> = vec![
        (ndt(2025, 1, 8), days(10), ndt(2025, 1, 20)), // Saturday to Monday
        (ndt(2025, 1, 9), days(10), ndt(2025, 1, 20)), // Sunday to Monday
    ];
    for option in options.iter() {
        let request = DeadlineRequest::new(option.0, option.1, false);
        assert_eq!(option.2, request.expiry(&RecessCal::new()));
    }
}

#[test]
fn recess_suspension() {
    // Art. 145: 10.7. + 10 days = 20.7., six recess days within
    // [15.7., 20.7.] give 26.7. (Saturday), expiring Monday 28.7.
    let request = DeadlineRequest::new(ndt(2025, 7, 10), days(10), true);
    assert_eq!(ndt(2025, 7, 28), request.expiry(&RecessCal::new()));

    // 15.12. + 10 days = 25.12., eight recess days within [18.12., 25.12.]
    // give Friday 2.1.
    let request = DeadlineRequest::new(ndt(2025, 12, 15), days(10), true);
    assert_eq!(ndt(2026, 1, 2), request.expiry(&RecessCal::new()));
}

#[test]
fn service_during_recess() {
    // Art. 146: served 20th July, deemed served 16th August
    let request = DeadlineRequest::new(ndt(2025, 7, 20), days(10), true);
    assert_eq!(ndt(2025, 8, 26), request.expiry(&RecessCal::new()));

    // served Christmas Eve, deemed served 3rd January
    let request = DeadlineRequest::new(ndt(2025, 12, 24), days(10), true);
    assert_eq!(ndt(2026, 1, 13), request.expiry(&RecessCal::new()));
}

#[test]
fn easter_reference_dates() {
    assert_eq!(ndt(2024, 3, 31), easter_sunday(2024));
    assert_eq!(ndt(2025, 4, 20), easter_sunday(2025));
}

#[test]
fn expiry_is_never_a_weekend_day() {
    let recess = RecessCal::new();
    for offset in 0..400 {
        let start = ndt(2024, 11, 1) + chrono::Days::new(offset);
        for term in [days(10), days(30), months(1)] {
            for flag in [false, true] {
                let end = DeadlineRequest::new(start, term, flag).expiry(&recess);
                assert!(!is_weekend(&end), "weekend expiry for start {}", start);
            }
        }
    }
}

#[test]
fn sequence_agrees_with_expiry() {
    // the rendered window marks exactly one LastDay, on the computed expiry
    let recess = RecessCal::new();
    let cal = get_calendar_by_name("zh").unwrap();
    for offset in 0..60 {
        let start = ndt(2025, 6, 15) + chrono::Days::new(offset);
        let request = DeadlineRequest::new(start, days(20), true);
        let end = request.expiry(&recess);
        let sequence = day_sequence(&request, &end, &cal, &recess);

        let last_days: Vec<_> = sequence
            .iter()
            .filter(|d| d.kind == DayKind::LastDay)
            .collect();
        assert_eq!(1, last_days.len());
        assert_eq!(end, last_days[0].date);
        assert_eq!(0, sequence.len() % 7);
    }
}
