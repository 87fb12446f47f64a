//! Price quotes and travel dates

use crate::error::{ImpromptuError, ImpromptuResult};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Days between today and the outbound flight
pub const DEPARTURE_OFFSET_DAYS: u64 = 2;
/// Days between today and the return flight
pub const RETURN_OFFSET_DAYS: u64 = 7;

/// Hotel prices for a destination, one value per tier.
///
/// The provider sends numbers or strings; both are kept as-is. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelQuote {
    pub top_tier: Value,
    pub medium_tier: Value,
    pub budget_tier: Value,
}

impl HotelQuote {
    /// `(label, value)` pairs in display order
    pub fn tiers(&self) -> [(&'static str, TierPrice<'_>); 3] {
        [
            ("Top Tier", TierPrice(&self.top_tier)),
            ("Medium Tier", TierPrice(&self.medium_tier)),
            ("Budget Tier", TierPrice(&self.budget_tier)),
        ]
    }
}

/// Displays a tier value without JSON quoting
#[derive(Debug, Clone, Copy)]
pub struct TierPrice<'a>(pub &'a Value);

impl fmt::Display for TierPrice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            Value::Null => f.write_str("n/a"),
            other => write!(f, "{}", other),
        }
    }
}

/// Flight prices; the schema belongs to the provider and is not validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightQuote(pub Value);

/// Outbound and return dates for a flight search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelDates {
    pub departure: NaiveDate,
    pub return_date: NaiveDate,
}

impl TravelDates {
    /// Both dates are offsets from the same `today`; the return date is not chained off
    /// the departure date.
    pub fn starting_from(today: NaiveDate) -> ImpromptuResult<Self> {
        let offset = |days: u64| {
            today.checked_add_days(Days::new(days)).ok_or_else(|| {
                ImpromptuError::invalid_input(format!("Date out of range: {} + {} days", today, days))
            })
        };

        Ok(Self {
            departure: offset(DEPARTURE_OFFSET_DAYS)?,
            return_date: offset(RETURN_OFFSET_DAYS)?,
        })
    }

    /// Dates relative to the local calendar day
    pub fn from_today() -> ImpromptuResult<Self> {
        Self::starting_from(chrono::Local::now().date_naive())
    }

    pub fn departure_param(&self) -> String {
        self.departure.format("%Y-%m-%d").to_string()
    }

    pub fn return_param(&self) -> String {
        self.return_date.format("%Y-%m-%d").to_string()
    }
}
