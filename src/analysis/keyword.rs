//! Keyword competition metrics derived from one batch of search results.

use crate::models::{AppSummary, CompetitionLevel, KeywordMetric};
use crate::utils::number::round_to;

const HIGH_COMPETITION_ABOVE: usize = 30;
const MEDIUM_COMPETITION_ABOVE: usize = 15;
const HOT_SCORE_CAP: u64 = 100;
const RATINGS_PER_HOT_POINT: u64 = 1000;

pub fn competition_level(app_count: usize) -> CompetitionLevel {
    if app_count > HIGH_COMPETITION_ABOVE {
        CompetitionLevel::High
    } else if app_count > MEDIUM_COMPETITION_ABOVE {
        CompetitionLevel::Medium
    } else {
        CompetitionLevel::Low
    }
}

pub fn hot_score(total_ratings: u64) -> u32 {
    (total_ratings / RATINGS_PER_HOT_POINT).min(HOT_SCORE_CAP) as u32
}

/// Metrics for `keyword` over `apps`. An empty batch yields all zeros and
/// `low` competition.
pub fn analyze(keyword: &str, apps: &[AppSummary]) -> KeywordMetric {
    let app_count = apps.len();
    let total_ratings: u64 = apps.iter().map(|app| app.rating_count).sum();
    let avg_rating = if app_count == 0 {
        0.0
    } else {
        let sum: f64 = apps.iter().map(|app| app.rating).sum();
        round_to(sum / app_count as f64, 2)
    };

    KeywordMetric {
        keyword: keyword.to_string(),
        app_count: app_count as u32,
        total_ratings,
        avg_rating,
        competition_level: competition_level(app_count),
        hot_score: hot_score(total_ratings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::storefront::stub::summary;
    use proptest::prelude::*;

    fn apps(count: usize) -> Vec<AppSummary> {
        (0..count).map(|i| summary(&i.to_string(), 4.0, 10)).collect()
    }

    #[test]
    fn test_empty_batch_is_zeroed() {
        let metric = analyze("nothing", &[]);
        assert_eq!(metric.app_count, 0);
        assert_eq!(metric.total_ratings, 0);
        assert_eq!(metric.avg_rating, 0.0);
        assert_eq!(metric.hot_score, 0);
        assert_eq!(metric.competition_level, CompetitionLevel::Low);

        let json = serde_json::to_value(&metric).unwrap();
        assert_eq!(json["avgRating"], serde_json::json!(0.0));
        assert_eq!(json["competitionLevel"], "low");
    }

    #[test]
    fn test_competition_boundaries() {
        assert_eq!(competition_level(31), CompetitionLevel::High);
        assert_eq!(competition_level(30), CompetitionLevel::Medium);
        assert_eq!(competition_level(16), CompetitionLevel::Medium);
        assert_eq!(competition_level(15), CompetitionLevel::Low);
        assert_eq!(analyze("k", &apps(31)).competition_level, CompetitionLevel::High);
    }

    #[test]
    fn test_hot_score_is_clamped_and_floored() {
        assert_eq!(hot_score(150_000), 100);
        assert_eq!(hot_score(500), 0);
        assert_eq!(hot_score(1_999), 1);
        assert_eq!(hot_score(100_000), 100);
    }

    #[test]
    fn test_averages_and_totals() {
        let batch = vec![
            summary("1", 4.5, 1_000),
            summary("2", 3.0, 2_500),
            summary("3", 4.2, 500),
        ];
        let metric = analyze("notes", &batch);
        assert_eq!(metric.keyword, "notes");
        assert_eq!(metric.app_count, 3);
        assert_eq!(metric.total_ratings, 4_000);
        assert_eq!(metric.avg_rating, 3.9);
        assert_eq!(metric.hot_score, 4);
    }

    #[test]
    fn test_avg_rating_two_decimals() {
        let batch = vec![summary("1", 4.7, 0), summary("2", 4.6, 0), summary("3", 4.6, 0)];
        assert_eq!(analyze("k", &batch).avg_rating, 4.63);
    }

    proptest! {
        #[test]
        fn prop_metrics_stay_in_bounds(
            ratings in proptest::collection::vec((0.0f64..=5.0, 0u64..10_000_000), 0..60)
        ) {
            let batch: Vec<AppSummary> = ratings
                .iter()
                .enumerate()
                .map(|(i, (r, c))| summary(&i.to_string(), *r, *c))
                .collect();
            let metric = analyze("p", &batch);

            prop_assert!(metric.hot_score <= 100);
            prop_assert!(metric.avg_rating >= 0.0 && metric.avg_rating <= 5.0);
            prop_assert_eq!(metric.app_count as usize, batch.len());
            prop_assert_eq!(metric.competition_level, competition_level(batch.len()));
        }
    }
}
