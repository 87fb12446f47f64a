//! CLI console utilities

use colored::*;
use impromptu_core::pricing::HotelQuote;
use impromptu_core::{PricePresenter, TripReport};

/// CLI console for formatted output
#[derive(Debug, Clone, Copy)]
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    /// Location, score and flight prices of a matched run
    pub fn print_report(&self, report: &TripReport) {
        self.success(&format!(
            "Detected location: {} (score {})",
            report.location, report.score
        ));
        self.print_header(&format!("Flight prices for {}", report.location));
        let flights = serde_json::to_string_pretty(&report.flights.0)
            .unwrap_or_else(|_| report.flights.0.to_string());
        println!("{}", flights);
    }
}

/// Prints the match and flight prices, then the hotel tiers, to stdout
pub struct ConsolePresenter {
    console: CliConsole,
}

impl ConsolePresenter {
    pub fn new(console: CliConsole) -> Self {
        Self { console }
    }
}

impl PricePresenter for ConsolePresenter {
    fn report(&self, report: &TripReport) {
        self.console.print_report(report);
    }

    fn present(&self, quote: &HotelQuote) {
        self.console.print_header("Hotel prices");
        for line in hotel_lines(quote) {
            println!("  {}", line);
        }
    }
}

fn hotel_lines(quote: &HotelQuote) -> Vec<String> {
    quote
        .tiers()
        .iter()
        .map(|(label, price)| format!("{}: {}", label.cyan(), price))
        .collect()
}
