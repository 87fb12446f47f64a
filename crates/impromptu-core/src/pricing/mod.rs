//! Flight and hotel price lookups

mod client;
pub mod types;

pub use client::PriceClient;
pub use types::{FlightQuote, HotelQuote, TierPrice, TravelDates};

use crate::error::{ImpromptuError, ImpromptuResult};
use async_trait::async_trait;

/// Source of flight and hotel prices for a destination
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Round-trip flight prices leaving in two days and returning in seven
    async fn fetch_flight_prices(&self, destination: &str) -> ImpromptuResult<FlightQuote>;

    async fn fetch_hotel_prices(&self, destination: &str) -> ImpromptuResult<HotelQuote>;
}

/// How a price request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceFailure {
    /// The server answered with an error status
    ErrorStatus(u16),
    /// No response came back
    NoResponse,
    Unexpected,
}

impl PriceFailure {
    pub fn classify(error: &ImpromptuError) -> Self {
        if let Some(status) = error.status_code() {
            return Self::ErrorStatus(status);
        }
        match error {
            ImpromptuError::Network { .. } => Self::NoResponse,
            _ => Self::Unexpected,
        }
    }
}

pub(crate) fn log_price_failure(kind: &str, destination: &str, error: &ImpromptuError) {
    match PriceFailure::classify(error) {
        PriceFailure::ErrorStatus(status) => {
            tracing::error!(kind, destination, status, error = %error, "price server responded with an error");
        }
        PriceFailure::NoResponse => {
            tracing::error!(kind, destination, error = %error, "no response received from price server");
        }
        PriceFailure::Unexpected => {
            tracing::error!(kind, destination, error = %error, "unexpected error fetching prices");
        }
    }
}
