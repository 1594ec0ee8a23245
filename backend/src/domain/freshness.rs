//! Freshness Classification
//!
//! Day arithmetic against the evaluation instant, and the four-state
//! freshness badge derived from it.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days from `now` until the start of `expiry` (UTC midnight), rounded up.
///
/// Today is 0, tomorrow 1, yesterday -1, whatever the time of day.
pub fn days_until_expiry(expiry: NaiveDate, now: DateTime<Utc>) -> i64 {
    let expiry_start = expiry.and_time(NaiveTime::MIN).and_utc();
    let delta = (expiry_start - now).num_milliseconds();
    // ceil(delta / day) for either sign
    -(-delta).div_euclid(MILLIS_PER_DAY)
}

/// Freshness of an item, ordered from most to least urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FreshnessStatus {
    Expired,
    ExpiringSoon,
    UseSoon,
    Fresh,
}

impl FreshnessStatus {
    pub fn from_days(days_until_expiry: i64) -> Self {
        match days_until_expiry {
            d if d < 0 => FreshnessStatus::Expired,
            0..=2 => FreshnessStatus::ExpiringSoon,
            3..=7 => FreshnessStatus::UseSoon,
            _ => FreshnessStatus::Fresh,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FreshnessStatus::Expired => "Expired",
            FreshnessStatus::ExpiringSoon => "Expiring Soon",
            FreshnessStatus::UseSoon => "Use Soon",
            FreshnessStatus::Fresh => "Fresh",
        }
    }
}

impl std::fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify(expiry: NaiveDate, now: DateTime<Utc>) -> FreshnessStatus {
    FreshnessStatus::from_days(days_until_expiry(expiry, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_ignore_time_of_day() {
        let today = date(2024, 3, 10);
        for hour in [0, 9, 15, 23] {
            let now = at(2024, 3, 10, hour);
            assert_eq!(days_until_expiry(today, now), 0);
            assert_eq!(days_until_expiry(today + Duration::days(1), now), 1);
            assert_eq!(days_until_expiry(today - Duration::days(1), now), -1);
            assert_eq!(days_until_expiry(today + Duration::days(8), now), 8);
        }
    }

    #[test]
    fn test_days_across_month_boundary() {
        assert_eq!(days_until_expiry(date(2024, 3, 2), at(2024, 2, 28, 12)), 3);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(FreshnessStatus::from_days(-1), FreshnessStatus::Expired);
        assert_eq!(FreshnessStatus::from_days(0), FreshnessStatus::ExpiringSoon);
        assert_eq!(FreshnessStatus::from_days(2), FreshnessStatus::ExpiringSoon);
        assert_eq!(FreshnessStatus::from_days(3), FreshnessStatus::UseSoon);
        assert_eq!(FreshnessStatus::from_days(7), FreshnessStatus::UseSoon);
        assert_eq!(FreshnessStatus::from_days(8), FreshnessStatus::Fresh);
    }

    #[test]
    fn test_classify_yesterday_is_expired() {
        let now = at(2024, 3, 10, 8);
        assert_eq!(classify(date(2024, 3, 9), now), FreshnessStatus::Expired);
        assert_eq!(classify(date(2024, 3, 9), now).label(), "Expired");
    }

    #[test]
    fn test_status_order_is_urgency() {
        assert!(FreshnessStatus::Expired < FreshnessStatus::ExpiringSoon);
        assert!(FreshnessStatus::UseSoon < FreshnessStatus::Fresh);
    }
}
