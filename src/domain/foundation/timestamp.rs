//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Returns the timestamp as Unix milliseconds.
    pub fn as_unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Formats as `dd/mm/yyyy HH:MM:SS`, the layout used in catalog reports.
    pub fn to_report_string(&self) -> String {
        self.0.format("%d/%m/%Y %H:%M:%S").to_string()
    }

    /// Formats as RFC 3339.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap())
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn report_string_uses_day_month_year() {
        assert_eq!(fixed().to_report_string(), "05/03/2024 14:07:09");
    }

    #[test]
    fn serializes_as_rfc3339_string() {
        let json = serde_json::to_string(&fixed()).unwrap();
        assert_eq!(json, "\"2024-03-05T14:07:09Z\"");
    }

    #[test]
    fn ordering_follows_time() {
        let earlier = fixed();
        let later = Timestamp::now();
        assert!(earlier.is_before(&later));
        assert!(earlier < later);
    }
}
