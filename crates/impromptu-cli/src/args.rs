//! CLI argument definitions using clap

use clap::Parser;
use impromptu_core::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "impromptu")]
#[command(about = "Spot a destination in a video and quote flights and hotels for it")]
#[command(
    long_about = r#"Spot a destination in a video and quote flights and hotels for it

USAGE:
  impromptu gs://bucket/clip.mp4                 # Analyse and print prices
  impromptu gs://bucket/clip.mp4 --html out.html # Also write the hotel price page

ENVIRONMENT:
  IMPROMPTU_VIDEO_API_KEY     API key for the annotation provider
  IMPROMPTU_VIDEO_BASE_URL    Annotation provider base URL
  IMPROMPTU_PRICES_BASE_URL   Flight and hotel price API base URL
  IMPROMPTU_LOG_LEVEL         Log filter used when RUST_LOG is not set"#
)]
#[command(version)]
pub struct Cli {
    /// Locator of the video or image to analyse
    pub source: String,

    /// Path to configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Write the hotel price page to this file
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,
}
