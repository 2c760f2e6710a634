//! Synthetic seven-day trend series.
//!
//! Values follow a fixed progression and do not depend on the app id.

use jiff::{ToSpan, Zoned};

use crate::models::TrendPoint;
use crate::utils::number::round_to;

pub const TREND_DAYS: i64 = 7;

/// Point `i` of the series, dated `start + i` days.
pub fn point(start: &Zoned, i: i64) -> TrendPoint {
    let date = start
        .checked_add(i.days())
        .unwrap_or_else(|_| start.clone())
        .strftime("%m-%d")
        .to_string();

    TrendPoint {
        date,
        downloads: (45_000 + i * 2_000 + (i % 2) * 1_000) as u64,
        ranking: (5 - i % 3).max(1) as u32,
        rating: round_to(4.5 + i as f64 * 0.05, 1),
    }
}

/// Seven daily points beginning seven days before `now`.
pub fn series_from(now: &Zoned) -> Vec<TrendPoint> {
    let start = now
        .checked_sub(TREND_DAYS.days())
        .unwrap_or_else(|_| now.clone());
    (0..TREND_DAYS).map(|i| point(&start, i)).collect()
}

pub fn series() -> Vec<TrendPoint> {
    series_from(&Zoned::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> Zoned {
        "2024-03-15T10:00:00[UTC]".parse().unwrap()
    }

    #[test]
    fn test_always_seven_points() {
        assert_eq!(series().len(), 7);
        assert_eq!(series_from(&fixed_now()).len(), 7);
    }

    #[test]
    fn test_dates_start_a_week_ago() {
        let points = series_from(&fixed_now());
        let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["03-08", "03-09", "03-10", "03-11", "03-12", "03-13", "03-14"]
        );
    }

    #[test]
    fn test_dates_cross_month_boundary() {
        let now: Zoned = "2024-03-03T00:00:00[UTC]".parse().unwrap();
        let points = series_from(&now);
        assert_eq!(points[0].date, "02-25");
        assert_eq!(points[4].date, "02-29");
        assert_eq!(points[5].date, "03-01");
    }

    #[test]
    fn test_progression_values() {
        let points = series_from(&fixed_now());
        let downloads: Vec<u64> = points.iter().map(|p| p.downloads).collect();
        assert_eq!(
            downloads,
            vec![45_000, 48_000, 49_000, 52_000, 53_000, 56_000, 57_000]
        );

        let rankings: Vec<u32> = points.iter().map(|p| p.ranking).collect();
        assert_eq!(rankings, vec![5, 4, 3, 5, 4, 3, 5]);

        let ratings: Vec<f64> = points.iter().map(|p| p.rating).collect();
        assert_eq!(ratings, vec![4.5, 4.5, 4.6, 4.7, 4.7, 4.8, 4.8]);
    }
}
