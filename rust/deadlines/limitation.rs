use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::deadlines::term::add_months;

/// A limitation (prescription) period for a civil claim.
///
/// Claims become time-barred a number of years after they arise: ten years
/// in the general case (OR Art. 127), five for periodic obligations
/// (OR Art. 128). An acknowledgement or debt-enforcement act interrupts the
/// period and restarts it in full from the interrupting act (OR Art. 135).
/// No weekend or recess adjustment applies to limitation periods.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitationRequest {
    /// Date the claim arose.
    pub claim_date: NaiveDateTime,
    /// Limitation period in years.
    pub years: u32,
    /// Date of the most recent interruption, if any.
    pub interruption: Option<NaiveDateTime>,
}

impl LimitationRequest {
    /// Create a new [`LimitationRequest`].
    pub fn new(claim_date: NaiveDateTime, years: u32, interruption: Option<NaiveDateTime>) -> Self {
        LimitationRequest {
            claim_date,
            years,
            interruption,
        }
    }

    /// Date the claim becomes time-barred.
    ///
    /// Runs from the interruption date when one is set, otherwise from the
    /// date the claim arose.
    pub fn expiry(&self) -> NaiveDateTime {
        let base = self.interruption.unwrap_or(self.claim_date);
        add_months(&base, self.years * 12)
    }

    /// Returns whether the claim is time-barred on a given date.
    ///
    /// The claim can still be pursued on the expiry date itself.
    pub fn is_expired(&self, on: &NaiveDateTime) -> bool {
        self.expiry() < *on
    }
}
