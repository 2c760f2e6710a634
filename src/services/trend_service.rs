use crate::analysis::trend;
use crate::models::TrendPoint;

/// Synthetic trend data; the app id is echoed but not looked up.
#[derive(Clone, Default)]
pub struct TrendService;

impl TrendService {
    pub fn new() -> Self {
        Self
    }

    pub fn trends(&self, _app_id: &str) -> Vec<TrendPoint> {
        trend::series()
    }
}
