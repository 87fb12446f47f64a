//! Trip planning run: annotate, score, price, present

use crate::annotation::MediaAnalyser;
use crate::error::{ImpromptuError, ImpromptuResult};
use crate::lexicon::LocationLexicon;
use crate::presentation::PricePresenter;
use crate::pricing::{FlightQuote, HotelQuote, PriceProvider};
use crate::scoring::score_locations;
use tracing::{error, info, instrument};

/// Everything found for a matched location
#[derive(Debug, Clone, PartialEq)]
pub struct TripReport {
    pub location: String,
    pub score: usize,
    pub flights: FlightQuote,
    pub hotels: HotelQuote,
}

/// Result of a run that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum TripOutcome {
    Matched(TripReport),
    /// No lexicon keyword appeared among the detected entities
    NoLocation,
}

/// Terminal state of a run
#[derive(Debug, Clone)]
pub enum RunStatus {
    /// Prices were fetched and the hotel quote handed to the presenter
    Presented(TripReport),
    NoLocation,
    Failed(ImpromptuError),
}

impl RunStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Sequences one run. Every call is awaited in turn; flight and hotel prices are fetched
/// one after the other.
pub struct TripPlanner<A, P> {
    analyser: A,
    prices: P,
    lexicon: LocationLexicon,
}

impl<A: MediaAnalyser, P: PriceProvider> TripPlanner<A, P> {
    pub fn new(analyser: A, prices: P, lexicon: LocationLexicon) -> Self {
        Self {
            analyser,
            prices,
            lexicon,
        }
    }

    /// Run the lookup and return the first failure, if any
    #[instrument(skip(self), level = "info")]
    pub async fn run(&self, source_uri: &str) -> ImpromptuResult<TripOutcome> {
        let annotations = self.analyser.analyse_media(source_uri).await?;
        let entities = annotations.entities();
        let Some((location, score)) = score_locations(&self.lexicon, &entities).into_match()
        else {
            info!(entities = entities.len(), "No valid location detected");
            return Ok(TripOutcome::NoLocation);
        };
        info!(location = %location, score, "Detected location");

        let flights = self.prices.fetch_flight_prices(&location).await?;
        info!(location = %location, flights = %flights.0, "Flight prices fetched");

        let hotels = self.prices.fetch_hotel_prices(&location).await?;
        info!(location = %location, hotels = ?hotels, "Hotel prices fetched");

        Ok(TripOutcome::Matched(TripReport {
            location,
            score,
            flights,
            hotels,
        }))
    }

    /// Run the lookup to a terminal state. Failures are logged and reported in the status,
    /// never propagated. A match is reported before the hotel quote is presented.
    pub async fn run_to_completion(
        &self,
        source_uri: &str,
        presenter: &dyn PricePresenter,
    ) -> RunStatus {
        match self.run(source_uri).await {
            Ok(TripOutcome::Matched(report)) => {
                presenter.report(&report);
                presenter.present(&report.hotels);
                RunStatus::Presented(report)
            }
            Ok(TripOutcome::NoLocation) => RunStatus::NoLocation,
            Err(err) => {
                error!(code = err.error_code(), error = %err, "Trip lookup failed");
                RunStatus::Failed(err)
            }
        }
    }
}
