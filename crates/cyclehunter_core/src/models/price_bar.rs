//! Price bar records supplied to the chart.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Julian day of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// One OHLC bar with open interest and volume.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceBar {
    /// Bar timestamp as a Julian day.
    pub timestamp_jd: f64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub open_interest: u64,
    pub volume: u64,
}

impl PriceBar {
    pub fn new(
        timestamp_jd: f64,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        open_interest: u64,
        volume: u64,
    ) -> Self {
        Self {
            timestamp_jd,
            open,
            high,
            low,
            close,
            open_interest,
            volume,
        }
    }

    /// Bar timestamp as UTC, or `None` if the Julian day is out of range.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        if !self.timestamp_jd.is_finite() {
            return None;
        }
        let millis = ((self.timestamp_jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
        if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zeroed() {
        let bar = PriceBar::default();
        assert_eq!(bar.timestamp_jd, 0.0);
        assert_eq!(bar.close, Decimal::ZERO);
        assert_eq!(bar.volume, 0);
    }

    #[test]
    fn julian_day_converts_to_utc() {
        let epoch = PriceBar {
            timestamp_jd: UNIX_EPOCH_JD,
            ..Default::default()
        };
        assert_eq!(epoch.timestamp().unwrap().timestamp(), 0);

        // J2000.0 is 2000-01-01T12:00:00Z.
        let j2000 = PriceBar {
            timestamp_jd: 2_451_545.0,
            ..Default::default()
        };
        assert_eq!(j2000.timestamp().unwrap().to_rfc3339(), "2000-01-01T12:00:00+00:00");
    }

    #[test]
    fn non_finite_timestamp_is_none() {
        let bar = PriceBar {
            timestamp_jd: f64::NAN,
            ..Default::default()
        };
        assert!(bar.timestamp().is_none());
    }
}
