//! The sequential check loop.
//!
//! One attempt per SKU, strictly in watchlist order, with a fixed pause
//! between consecutive queries. A failed check is reported on the same stream
//! as the report and the loop moves on — no per-SKU failure ever aborts the
//! run.

use std::io::Write;
use std::time::Duration;

use stockwatch_kmart::{render_report, KmartClient};

/// Counts accumulated over one run of the loop.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub checked: usize,
    pub succeeded: usize,
    pub network_errors: usize,
    pub unexpected_errors: usize,
}

/// Checks every SKU in `skus` at `postcode`, writing the report to `out`.
///
/// Each SKU gets its `=== Checking SKU ... ===` header before the request is
/// sent, then either the rendered report or a one-line error. The loop pauses
/// for `delay` between consecutive SKUs (not after the last one).
///
/// # Errors
///
/// Only I/O failures on `out` are propagated; availability errors are
/// consumed, counted, and reported inline.
pub async fn run_checks(
    client: &KmartClient,
    skus: &[String],
    postcode: &str,
    delay: Duration,
    out: &mut impl Write,
) -> std::io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (i, sku) in skus.iter().enumerate() {
        writeln!(out, "=== Checking SKU {sku} ===")?;
        summary.checked += 1;

        match client.check_availability(sku, postcode).await {
            Ok(availability) => {
                write!(out, "{}", render_report(sku, postcode, &availability))?;
                summary.succeeded += 1;
            }
            Err(e) if e.is_network() => {
                tracing::warn!(sku = %sku, error = %e, "availability check failed at the network level");
                writeln!(out, "Network/API error for SKU {sku}: {e}\n")?;
                summary.network_errors += 1;
            }
            Err(e) => {
                tracing::warn!(sku = %sku, error = %e, "availability check failed unexpectedly");
                writeln!(out, "Unexpected error for SKU {sku}: {e}\n")?;
                summary.unexpected_errors += 1;
            }
        }

        if i + 1 < skus.len() {
            tokio::time::sleep(delay).await;
        }
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
