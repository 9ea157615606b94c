mod cal;
mod dateroll;
mod easter;
mod named;
mod recess;

pub use crate::deadlines::calendars::{
    cal::Cal,
    dateroll::{cal_date_range, is_weekend, ndt, next_non_weekend, DateRoll},
    easter::easter_sunday,
    named::{get_calendar_by_name, CalendarError},
    recess::{RecessCal, RecessWindow},
};
