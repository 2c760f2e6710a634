//! Domain models shared by the storefront client, services and API.

mod app;
mod keyword;
mod listing;
mod trend;

pub use app::{AppDetail, AppSummary, RankedApp};
pub use keyword::{CompetitionLevel, KeywordMetric};
pub use listing::{RankingListing, SearchListing};
pub use trend::TrendPoint;
