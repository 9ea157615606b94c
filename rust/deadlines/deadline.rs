use chrono::prelude::*;
use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::deadlines::calendars::{cal_date_range, next_non_weekend, RecessCal};
use crate::deadlines::Term;

/// A procedural deadline triggered by the service of a document.
///
/// Construction performs no validation: well-formed dates and term lengths
/// are a caller contract, in line with the surrounding application layer
/// owning all input checking.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlineRequest {
    /// Date the triggering document was served.
    pub start: NaiveDateTime,
    /// Length of the deadline.
    pub term: Term,
    /// Whether the judicial recess rules (Art. 145/146 ZPO) apply to the
    /// proceedings. Summary proceedings and conciliation are exempt
    /// (Art. 145 Abs. 2).
    pub court_recess: bool,
}

impl DeadlineRequest {
    /// Create a new [`DeadlineRequest`].
    pub fn new(start: NaiveDateTime, term: Term, court_recess: bool) -> Self {
        DeadlineRequest {
            start,
            term,
            court_recess,
        }
    }

    /// Date from which the term effectively runs.
    ///
    /// A document served during a judicial recess is deemed served on the
    /// first day after the recess ends (Art. 146 Abs. 1 ZPO). Outside a
    /// recess, or when the recess rules do not apply, this is the service
    /// date itself.
    pub fn effective_start(&self, recess: &RecessCal) -> NaiveDateTime {
        if self.court_recess {
            recess.recess_following_day(&self.start).unwrap_or(self.start)
        } else {
            self.start
        }
    }

    /// Final day of the deadline.
    ///
    /// Computed in a fixed sequence of stages:
    ///
    /// 1. substitute the effective start ([`effective_start`](Self::effective_start)),
    /// 2. add the term ([`Term::unadjusted_end`]),
    /// 3. extend by one day per recess day within the unadjusted interval
    ///    (Art. 145 Abs. 1 ZPO),
    /// 4. move a Saturday or Sunday end to the next working day
    ///    (Art. 142 Abs. 3 ZPO).
    ///
    /// Stage 3 counts the closed interval from the effective start to the
    /// unadjusted end exactly once; recess days that the extension itself
    /// moves the end across are not counted again. Stage 4 skips weekends
    /// only: an end falling on a cantonal public holiday stands, the narrow
    /// reading of Art. 142 Abs. 3.
    ///
    /// The result is never a Saturday or Sunday.
    ///
    /// # Examples
    /// ```rust
    /// # use fristlib::deadlines::{ndt, DeadlineRequest, RecessCal, Term};
    /// let recess = RecessCal::new();
    ///
    /// let request = DeadlineRequest::new(ndt(2025, 1, 8), Term::Days { number: 10 }, false);
    /// assert_eq!(ndt(2025, 1, 20), request.expiry(&recess)); // Saturday moved to Monday
    ///
    /// let request = DeadlineRequest::new(ndt(2025, 1, 31), Term::Months { number: 1 }, false);
    /// assert_eq!(ndt(2025, 2, 28), request.expiry(&recess)); // clamped month end
    /// ```
    pub fn expiry(&self, recess: &RecessCal) -> NaiveDateTime {
        let effective_start = self.effective_start(recess);
        let raw_end = self.term.unadjusted_end(&effective_start);

        // Art. 145: the deadline stands still during the recess.
        let end = if self.court_recess {
            let suspended = cal_date_range(&effective_start, &raw_end)
                .iter()
                .filter(|d| recess.is_recess(d))
                .count();
            raw_end + Days::new(u64::try_from(suspended).unwrap())
        } else {
            raw_end
        };

        next_non_weekend(&end)
    }
}
