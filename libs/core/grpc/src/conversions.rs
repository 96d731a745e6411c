//! Generic protobuf ↔ domain conversions
//!
//! Wire timestamps across the workspace are `google.protobuf.Timestamp`,
//! carried at full (nanosecond) precision.
//!
//! ```ignore
//! use grpc_client::conversions::*;
//! use chrono::Utc;
//!
//! let timestamp = datetime_to_timestamp(Utc::now());
//! ```

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

/// Convert DateTime<Utc> to a protobuf Timestamp (seconds + nanos)
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> Timestamp {
  Timestamp {
    seconds: dt.timestamp(),
    // chrono encodes a leap second as nanos >= 1_000_000_000; protobuf caps nanos below that
    nanos: dt.timestamp_subsec_nanos().min(999_999_999) as i32,
  }
}
