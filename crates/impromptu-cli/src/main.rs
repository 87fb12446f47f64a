//! Impromptu CLI
//!
//! Analyses a video, picks the best matching destination and prints flight and hotel
//! prices for it.
//!
//! ```bash
//! impromptu gs://bucket/holiday.mp4 --html hotels.html
//! ```

mod args;
mod commands;
mod console;
mod logging;
mod router;

use clap::Parser;
use std::process::ExitCode;

pub use args::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    router::route(cli).await
}
