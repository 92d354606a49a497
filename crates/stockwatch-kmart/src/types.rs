//! Wire types for the Kmart AU `getProductAvailability` GraphQL operation.
//!
//! ## Observed response shape
//!
//! The gateway wraps everything in the usual GraphQL envelope: `data` plus an
//! optional `errors` array. Inside, `availability` is keyed by fulfilment
//! method (`HOME_DELIVERY`, `CLICK_AND_COLLECT`), each an array with one
//! element per queried keycode.
//!
//! `poolName` names the delivery fulfilment pool (e.g. a regional warehouse)
//! and is sometimes absent, so it is modelled as `Option` and rendered as
//! `Unknown`. Stock objects are required: an entry without `stock.available`
//! is a malformed response, surfaced as a deserialization error rather than
//! silently zeroed.

use serde::{Deserialize, Serialize};

/// GraphQL document sent with every request. Selection set matches exactly
/// what the report consumes plus the echo fields (postcode/country/region).
pub const AVAILABILITY_QUERY: &str = "\
query getProductAvailability($input: ProductAvailabilityQueryInput!) {
  getProductAvailability(input: $input) {
    postcode
    country
    region
    availability {
      HOME_DELIVERY {
        keycode
        poolName
        stock { available }
      }
      CLICK_AND_COLLECT {
        keycode
        stock { totalAvailable }
        locations {
          fulfilment {
            locationId
            stock { available }
          }
          location { locationId }
        }
      }
    }
  }
}";

const OPERATION_NAME: &str = "getProductAvailability";
const FULFILMENT_METHODS: [&str; 2] = ["HOME_DELIVERY", "CLICK_AND_COLLECT"];

/// Request envelope for one availability check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub operation_name: &'static str,
    pub variables: Variables,
    pub query: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Variables {
    pub input: AvailabilityInput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityInput {
    pub country: String,
    pub postcode: String,
    pub products: Vec<ProductQuery>,
    pub fulfilment_methods: [&'static str; 2],
    pub amend_nearest_in_stock_cnc: bool,
    pub limit: u32,
}

/// One product in the query. Quantity is always 1 — the checker asks whether
/// a single unit is available, not how many could be ordered.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub keycode: String,
    pub quantity: u32,
    pub is_national_inventory: bool,
    pub is_click_and_collect_only: bool,
}

impl AvailabilityRequest {
    /// Builds the request envelope for a single keycode at `postcode`.
    ///
    /// `limit` caps the number of click-and-collect locations the gateway
    /// returns per entry.
    #[must_use]
    pub fn new(keycode: &str, postcode: &str, country: &str, limit: u32) -> Self {
        Self {
            operation_name: OPERATION_NAME,
            variables: Variables {
                input: AvailabilityInput {
                    country: country.to_owned(),
                    postcode: postcode.to_owned(),
                    products: vec![ProductQuery {
                        keycode: keycode.to_owned(),
                        quantity: 1,
                        is_national_inventory: false,
                        is_click_and_collect_only: false,
                    }],
                    fulfilment_methods: FULFILMENT_METHODS,
                    amend_nearest_in_stock_cnc: true,
                    limit,
                },
            },
            query: AVAILABILITY_QUERY,
        }
    }
}

/// Top-level GraphQL envelope.
#[derive(Debug, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub data: Option<AvailabilityData>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityData {
    #[serde(default)]
    pub get_product_availability: Option<ProductAvailability>,
}

#[derive(Debug, Deserialize)]
pub struct ProductAvailability {
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Absent when the gateway has nothing to say about the keycode.
    #[serde(default)]
    pub availability: Option<Availability>,
}

/// Per-fulfilment-method availability for one checked keycode.
#[derive(Debug, Default, Deserialize)]
pub struct Availability {
    #[serde(rename = "HOME_DELIVERY", default)]
    pub home_delivery: Vec<HomeDeliveryEntry>,
    #[serde(rename = "CLICK_AND_COLLECT", default)]
    pub click_and_collect: Vec<CncEntry>,
}

/// One home-delivery fulfilment pool and its stock level.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeDeliveryEntry {
    #[serde(default)]
    pub keycode: Option<String>,
    /// Delivery pool label. Absent on some responses; rendered as `Unknown`.
    #[serde(default)]
    pub pool_name: Option<String>,
    pub stock: Stock,
}

#[derive(Debug, Deserialize)]
pub struct Stock {
    pub available: i64,
}

/// One click-and-collect entry: aggregate stock plus per-store breakdown.
#[derive(Debug, Deserialize)]
pub struct CncEntry {
    #[serde(default)]
    pub keycode: Option<String>,
    pub stock: CncStock,
    #[serde(default)]
    pub locations: Vec<CncLocation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CncStock {
    pub total_available: i64,
}

#[derive(Debug, Deserialize)]
pub struct CncLocation {
    pub fulfilment: CncFulfilment,
    pub location: CncLocationRef,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CncFulfilment {
    pub location_id: String,
    pub stock: Stock,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CncLocationRef {
    pub location_id: String,
}
