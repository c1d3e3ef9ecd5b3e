//! Feed rows and date normalization.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use ettj_math::Svensson;

use crate::error::{FeedError, FeedResult};

/// One historical parameter row: a curve-type tag, an estimation date and
/// the six NSS parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NssRow {
    /// Curve-type tag, e.g. `pre` or `ipca`.
    #[serde(rename = "type")]
    pub curve_type: String,
    /// Estimation date, normalized to an ISO calendar date.
    pub date: NaiveDate,
    /// Level.
    pub b1: f64,
    /// Slope.
    pub b2: f64,
    /// First curvature component.
    pub b3: f64,
    /// Second curvature component.
    pub b4: f64,
    /// First decay rate.
    pub l1: f64,
    /// Second decay rate.
    pub l2: f64,
}

impl NssRow {
    /// Converts the row into a validated model.
    ///
    /// Fails if the row carries a non-positive decay rate; the feed
    /// forwards the model's own domain guard rather than re-implementing
    /// it.
    pub fn to_params(&self) -> FeedResult<Svensson> {
        Svensson::new(self.b1, self.b2, self.b3, self.b4, self.l1, self.l2).map_err(|source| {
            FeedError::InvalidParams {
                curve_type: self.curve_type.clone(),
                date: self.date.to_string(),
                source,
            }
        })
    }
}

/// Normalizes a raw date field to a calendar date.
///
/// The upstream export stores the date column either as an ISO date (or
/// datetime, in which case only the date part matters) or as an epoch
/// timestamp. Timestamps at or above 1e11 are taken as milliseconds,
/// below as seconds; both ranges cover every plausible estimation date.
pub fn normalize_date(raw: &str) -> FeedResult<NaiveDate> {
    let raw = raw.trim();

    // ISO date or datetime: the first ten characters form the date.
    if let Some(prefix) = raw.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Ok(date);
        }
    }

    if let Ok(number) = raw.parse::<f64>() {
        #[allow(clippy::cast_possible_truncation)]
        let seconds = if number.abs() >= 1e11 {
            (number / 1000.0) as i64
        } else {
            number as i64
        };

        return DateTime::from_timestamp(seconds, 0)
            .map(|dt| dt.date_naive())
            .ok_or_else(|| FeedError::InvalidDate {
                value: raw.to_string(),
            });
    }

    Err(FeedError::InvalidDate {
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_passthrough() {
        let date = normalize_date("2025-08-07").unwrap();
        assert_eq!(date.to_string(), "2025-08-07");
    }

    #[test]
    fn test_iso_datetime_truncates() {
        let date = normalize_date("2025-08-07T00:00:00.000Z").unwrap();
        assert_eq!(date.to_string(), "2025-08-07");
    }

    #[test]
    fn test_epoch_milliseconds() {
        // 2025-08-07T00:00:00Z in milliseconds.
        let date = normalize_date("1754524800000").unwrap();
        assert_eq!(date.to_string(), "2025-08-07");
    }

    #[test]
    fn test_epoch_seconds() {
        let date = normalize_date("1754524800").unwrap();
        assert_eq!(date.to_string(), "2025-08-07");
    }

    #[test]
    fn test_garbage_date_rejected() {
        assert!(normalize_date("yesterday").is_err());
        assert!(normalize_date("").is_err());
    }

    #[test]
    fn test_row_to_params() {
        let row = NssRow {
            curve_type: "pre".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 7).unwrap(),
            b1: 0.060553,
            b2: 0.082648,
            b3: 0.102802,
            b4: 0.229391,
            l1: 1.965289,
            l2: 0.16948,
        };
        let params = row.to_params().unwrap();
        assert_eq!(params.params().0, 0.060553);
    }

    #[test]
    fn test_zero_decay_row_rejected() {
        let row = NssRow {
            curve_type: "pre".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 7).unwrap(),
            b1: 0.06,
            b2: 0.08,
            b3: 0.1,
            b4: 0.2,
            l1: 0.0,
            l2: 0.17,
        };
        assert!(matches!(
            row.to_params(),
            Err(FeedError::InvalidParams { .. })
        ));
    }
}
