//! Shared utility functions.

/// Current UTC time as an RFC 3339 string with millisecond precision.
///
/// All timestamps in the audit trail use this format so entries sort
/// lexicographically in creation order.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
