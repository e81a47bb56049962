use chrono::{DateTime, TimeZone, Utc};

/// Convert a `DateTime<Utc>` to epoch milliseconds.
pub fn to_epoch_ms(dt: DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

/// Convert epoch milliseconds (i64) to `DateTime<Utc>`.
pub fn from_epoch_ms(ms: i64) -> DateTime<Utc> {
    // If the value is out of range, fall back to 1970-01-01
    Utc.timestamp_millis_opt(ms)
        .single()
        .unwrap_or_else(|| Utc.timestamp_millis_opt(0).single().unwrap())
}

/// Returns the current epoch milliseconds.
pub fn current_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}
