pub mod client;
pub mod error;
pub mod report;
pub mod types;

pub use client::KmartClient;
pub use error::AvailabilityError;
pub use report::render_report;
pub use types::{Availability, CncEntry, HomeDeliveryEntry};
