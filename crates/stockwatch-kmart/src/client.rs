//! HTTP client for the Kmart AU availability GraphQL gateway.
//!
//! Wraps `reqwest` with the fixed headers the gateway expects and a typed
//! error taxonomy. One POST per check; no retries — the caller decides what
//! a failed check means (here: report and move on).

use std::time::Duration;

use reqwest::{Client, Url};

use stockwatch_core::AppConfig;

use crate::error::AvailabilityError;
use crate::types::{Availability, AvailabilityRequest, AvailabilityResponse};

/// Client for the `getProductAvailability` operation.
///
/// Use [`KmartClient::new`] for the production gateway or
/// [`KmartClient::with_endpoint`] to point at a mock server in tests.
pub struct KmartClient {
    client: Client,
    endpoint: Url,
    referer: String,
    country: String,
    cnc_location_limit: u32,
}

impl KmartClient {
    /// Creates a client pointed at the endpoint configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AvailabilityError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AvailabilityError::Api`] if the configured
    /// endpoint is not a valid URL.
    pub fn new(config: &AppConfig) -> Result<Self, AvailabilityError> {
        Self::with_endpoint(&config.endpoint_url, config)
    }

    /// Creates a client with an explicit endpoint (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same conditions as [`KmartClient::new`].
    pub fn with_endpoint(endpoint: &str, config: &AppConfig) -> Result<Self, AvailabilityError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        let endpoint = Url::parse(endpoint)
            .map_err(|e| AvailabilityError::Api(format!("invalid endpoint URL '{endpoint}': {e}")))?;

        Ok(Self {
            client,
            endpoint,
            referer: config.referer.clone(),
            country: config.country.clone(),
            cnc_location_limit: config.cnc_location_limit,
        })
    }

    /// Checks availability of one keycode at `postcode`.
    ///
    /// Sends a single POST and unwraps the response down to the availability
    /// tree. Exactly one attempt; every failure mode is typed so the caller
    /// can classify it.
    ///
    /// # Errors
    ///
    /// - [`AvailabilityError::Http`] — network or TLS failure.
    /// - [`AvailabilityError::UnexpectedStatus`] — non-2xx HTTP status.
    /// - [`AvailabilityError::Deserialize`] — body is not the expected JSON.
    /// - [`AvailabilityError::Api`] — GraphQL-level error or null `data`.
    /// - [`AvailabilityError::MissingAvailability`] — payload parsed but no
    ///   availability tree was present for the keycode.
    pub async fn check_availability(
        &self,
        keycode: &str,
        postcode: &str,
    ) -> Result<Availability, AvailabilityError> {
        let payload = AvailabilityRequest::new(keycode, postcode, &self.country, self.cnc_location_limit);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "*/*")
            .header(reqwest::header::REFERER, &self.referer)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AvailabilityError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<AvailabilityResponse>(&body).map_err(|e| {
            AvailabilityError::Deserialize {
                context: format!("availability for keycode {keycode}"),
                source: e,
            }
        })?;

        if !parsed.errors.is_empty() {
            let messages: Vec<String> = parsed.errors.into_iter().map(|e| e.message).collect();
            return Err(AvailabilityError::Api(messages.join("; ")));
        }

        let availability = parsed
            .data
            .and_then(|d| d.get_product_availability)
            .and_then(|p| p.availability)
            .ok_or_else(|| AvailabilityError::MissingAvailability {
                keycode: keycode.to_owned(),
            })?;

        tracing::debug!(
            keycode,
            postcode,
            home_delivery_entries = availability.home_delivery.len(),
            cnc_entries = availability.click_and_collect.len(),
            "availability check succeeded"
        );

        Ok(availability)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
