use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One synthetic daily data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendPoint {
    /// Month and day, `MM-DD`
    #[schema(example = "03-14")]
    pub date: String,
    pub downloads: u64,
    pub ranking: u32,
    pub rating: f64,
}
