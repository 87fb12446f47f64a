//! HTTP client for the flight and hotel price endpoints

use super::PriceProvider;
use super::types::{FlightQuote, HotelQuote, TravelDates};
use crate::config::PriceApiConfig;
use crate::error::{ImpromptuError, ImpromptuResult};
use crate::recovery::{Delay, RetryConfig, RetryExecutor, TokioDelay};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::instrument;

/// Price lookups against `{base_url}/flights` and `{base_url}/hotels`.
///
/// Each lookup is a single GET wrapped in the retry executor, so server errors are
/// retried with a fixed delay while client errors fail straight away.
pub struct PriceClient<D: Delay = TokioDelay> {
    base_url: String,
    http_client: Client,
    retry: RetryExecutor<D>,
}

impl PriceClient<TokioDelay> {
    pub fn new(config: &PriceApiConfig, retry: RetryConfig) -> ImpromptuResult<Self> {
        Self::with_executor(config, RetryExecutor::new(retry))
    }
}

impl<D: Delay> PriceClient<D> {
    pub fn with_executor(config: &PriceApiConfig, retry: RetryExecutor<D>) -> ImpromptuResult<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                ImpromptuError::config(format!("Failed to build price HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
            retry,
        })
    }

    /// Flight prices for explicit travel dates
    #[instrument(skip(self), level = "debug")]
    pub async fn flight_prices_for(
        &self,
        destination: &str,
        dates: TravelDates,
    ) -> ImpromptuResult<FlightQuote> {
        let query = [
            ("destination", destination.to_string()),
            ("departureDate", dates.departure_param()),
            ("returnDate", dates.return_param()),
        ];
        let value = self.get_json("flights", &query).await?;
        Ok(FlightQuote(value))
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn hotel_prices(&self, destination: &str) -> ImpromptuResult<HotelQuote> {
        let query = [("destination", destination.to_string())];
        let value = self.get_json("hotels", &query).await?;
        serde_json::from_value(value).map_err(|e| {
            ImpromptuError::json(format!("Unexpected hotel price payload: {}", e))
                .with_context(format!("Hotel prices for {}", destination))
        })
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> ImpromptuResult<Value> {
        let url = format!("{}/{}", self.base_url, path);
        let value = self.retry.execute(|| self.send_once(&url, query)).await?;
        Ok(value)
    }

    async fn send_once(&self, url: &str, query: &[(&str, String)]) -> ImpromptuResult<Value> {
        let response = self.http_client.get(url).query(query).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl<D: Delay> PriceProvider for PriceClient<D> {
    async fn fetch_flight_prices(&self, destination: &str) -> ImpromptuResult<FlightQuote> {
        let result = match TravelDates::from_today() {
            Ok(dates) => {
                tracing::debug!(
                    destination,
                    departure = %dates.departure,
                    return_date = %dates.return_date,
                    "fetching flight prices"
                );
                self.flight_prices_for(destination, dates).await
            }
            Err(e) => Err(e),
        };
        result.inspect_err(|e| super::log_price_failure("flight", destination, e))
    }

    async fn fetch_hotel_prices(&self, destination: &str) -> ImpromptuResult<HotelQuote> {
        tracing::debug!(destination, "fetching hotel prices");
        self.hotel_prices(destination)
            .await
            .inspect_err(|e| super::log_price_failure("hotel", destination, e))
    }
}

async fn check_status(response: Response) -> ImpromptuResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    Err(ImpromptuError::Http {
        message: format!("Price API error (status {}): {}", status, body),
        url: Some(url),
        status_code: Some(status.as_u16()),
        context: None,
    })
}
