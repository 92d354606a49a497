//! Human-readable rendering of one availability result.
//!
//! Output layout is fixed: a stock-info line, a Home Delivery section, a
//! Click & Collect section, then a dashed separator. Entries appear in the
//! order the gateway returned them.

use std::fmt::Write;

use crate::types::Availability;

const SEPARATOR: &str = "------------------------------------------";

/// Renders the report body for one checked keycode.
///
/// The `=== Checking SKU ... ===` header is printed by the check loop before
/// the request goes out, so a failed check still gets its header; this
/// function only renders the success body.
#[must_use]
pub fn render_report(keycode: &str, postcode: &str, availability: &Availability) -> String {
    let mut out = String::new();

    // fmt::Write to a String cannot fail.
    let _ = writeln!(out, "\nStock info for SKU {keycode} at postcode {postcode}:\n");

    let _ = writeln!(out, "=== Home Delivery ===");
    for entry in &availability.home_delivery {
        let store = entry.pool_name.as_deref().unwrap_or("Unknown");
        let _ = writeln!(out, "Store: {store} | Available: {}", entry.stock.available);
    }

    let _ = writeln!(out, "\n=== Click & Collect ===");
    for entry in &availability.click_and_collect {
        let _ = writeln!(
            out,
            "Total available across locations: {}",
            entry.stock.total_available
        );
        for loc in &entry.locations {
            let _ = writeln!(
                out,
                "Location ID: {} | Available: {}",
                loc.location.location_id, loc.fulfilment.stock.available
            );
        }
    }

    let _ = writeln!(out, "\n{SEPARATOR}\n");
    out
}
