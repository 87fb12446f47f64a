//! Presentation of the final hotel quote

use crate::planner::TripReport;
use crate::pricing::HotelQuote;

/// Output side of a matched run.
///
/// The planner calls [`report`](Self::report) with the location, score and both quotes,
/// then [`present`](Self::present) with the hotel quote. Neither is called when the run
/// fails or finds no location.
#[cfg_attr(test, mockall::automock)]
pub trait PricePresenter: Send + Sync {
    fn report(&self, report: &TripReport);

    fn present(&self, quote: &HotelQuote);
}

/// Element id of the hotel price section in the rendered page
pub const HOTEL_PRICES_ID: &str = "hotelPrices";

/// Render a standalone HTML page with the hotel prices for `destination`.
///
/// The price section starts hidden; a "Show Hotel Prices" button toggles it.
pub fn render_hotel_prices_page(destination: &str, quote: &HotelQuote) -> String {
    let mut tiers = String::new();
    for (label, price) in quote.tiers() {
        tiers.push_str(&format!(
            "    <p>{}: {}</p>\n",
            label,
            escape_html(&price.to_string())
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Hotel prices in {destination}</title>
</head>
<body>
  <h1>Hotel prices in {destination}</h1>
  <button type="button" onclick="var el = document.getElementById('{id}'); el.style.display = el.style.display === 'none' ? 'block' : 'none';">Show Hotel Prices</button>
  <div id="{id}" style="display: none">
{tiers}  </div>
</body>
</html>
"#,
        destination = escape_html(destination),
        id = HOTEL_PRICES_ID,
        tiers = tiers,
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
