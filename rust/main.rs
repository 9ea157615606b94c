use fristlib::deadlines::{
    day_sequence, get_calendar_by_name, ndt, DateRoll, DayKind, DeadlineRequest, RecessCal, Term,
};

fn main() {
    // worked example: a ten day deadline served just before the summer recess
    let recess = RecessCal::new();
    let request = DeadlineRequest::new(ndt(2025, 7, 10), Term::Days { number: 10 }, true);
    let end = request.expiry(&recess);
    println!(
        "served {}, term of 10 days -> expires {}",
        request.start.date(),
        end.date()
    );

    let cal = get_calendar_by_name("zh").unwrap();
    println!("cantonal working day: {}", cal.is_bus_day(&end));

    for day in day_sequence(&request, &end, &cal, &recess) {
        let ordinal = day
            .ordinal
            .map_or("  ".to_string(), |o| format!("{:>2}", o));
        let marker = match day.kind {
            DayKind::Empty => " ",
            DayKind::Normal => ".",
            DayKind::Weekend => "w",
            DayKind::Holiday => "h",
            DayKind::CourtRecess => "r",
            DayKind::LastDay => "X",
        };
        println!("{} {} {}", day.date.date(), marker, ordinal);
    }
}
