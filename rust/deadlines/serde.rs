use crate::deadlines::{
    Cal, CalendarDay, DayKind, DeadlineRequest, LimitationRequest, RecessWindow, Term,
};
use crate::json::JSON;

impl JSON for Cal {}
impl JSON for RecessWindow {}
impl JSON for Term {}
impl JSON for DeadlineRequest {}
impl JSON for DayKind {}
impl JSON for CalendarDay {}
impl JSON for LimitationRequest {}
