//! HAR 1.2 data model.
//!
//! Plain value records mirroring the HAR object schema. Field order in each
//! struct is the key order on the wire. Fields the schema requires but allows
//! to be "unknown" carry a sentinel default (`-1`, `""`) and are always
//! emitted; truly optional fields are `Option<T>` and are omitted when `None`.

mod cache;
mod entry;
mod meta;
mod record;
mod request;
mod response;
mod timings;

pub use cache::{Cache, CacheEntry};
pub use entry::Entry;
pub use meta::{Browser, Creator};
pub use record::{Cookie, Record};
pub use request::{PostData, PostParameter, Request};
pub use response::{Content, Response};
pub use timings::Timings;

use serde::ser::{Error as _, Serializer};

/// Sentinel for sizes that were not measured (`headersSize`, `bodySize`).
pub const UNKNOWN_SIZE: i64 = -1;

/// Sentinel for timing phases that do not apply or were not measured.
pub const NOT_MEASURED: f64 = -1.0;

pub(crate) fn unknown_size() -> i64 {
    UNKNOWN_SIZE
}

pub(crate) fn not_measured() -> f64 {
    NOT_MEASURED
}

/// Largest magnitude below which every whole `f64` is an exact `i64`.
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Writes a millisecond/byte quantity in its shortest JSON form: whole values
/// as integers (`-1`, not `-1.0`). NaN and infinities are rejected instead of
/// being written as `null`.
pub(crate) fn serialize_number<S: Serializer>(
    value: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(S::Error::custom(format!(
            "non-finite number {value} in HAR field"
        )));
    }
    if value.fract() == 0.0 && value.abs() < EXACT_INT_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

pub(crate) fn serialize_opt_number<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serialize_number(v, serializer),
        None => serializer.serialize_none(),
    }
}
