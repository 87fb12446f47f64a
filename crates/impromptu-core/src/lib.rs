//! Impromptu core library
//!
//! Finds a travel destination in a video and prices a trip there:
//! - media annotation through a video-intelligence provider
//! - scoring of detected entities against a location lexicon
//! - retry-governed flight and hotel price lookups
//! - a planner that sequences the whole run and hands the hotel quote to a presenter

pub mod annotation;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod planner;
pub mod presentation;
pub mod pricing;
pub mod recovery;
pub mod scoring;

// Re-export commonly used types
pub use annotation::{AnnotationResult, MediaAnalyser, VideoIntelligenceClient};
pub use config::{Config, ConfigLoader};
pub use error::{ImpromptuError, ImpromptuResult};
pub use lexicon::{LocationEntry, LocationLexicon};
pub use planner::{RunStatus, TripOutcome, TripPlanner, TripReport};
pub use presentation::{PricePresenter, render_hotel_prices_page};
pub use pricing::{FlightQuote, HotelQuote, PriceClient, PriceProvider};
pub use recovery::{RetryConfig, RetryError, RetryExecutor, Transient};
pub use scoring::{ScoreResult, score_locations};
