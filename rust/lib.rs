//! This is the documentation for fristlib-rs
//!
//! *Fristlib* computes statutory deadlines under the Swiss Code of Civil
//! Procedure (ZPO): day and month denominated deadlines, judicial recess
//! suspension, deemed service during a recess, and weekend adjustment of the
//! final day. See the [`deadlines`] module for the full overview.

#[cfg(test)]
mod tests;

pub mod json;

pub mod deadlines;
