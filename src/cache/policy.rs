//! Per-namespace time-to-live rules.

use std::time::Duration;

use crate::cache::Namespace;
use crate::config::CacheSettings;

/// How long entries in each namespace stay fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    base_ttl: Duration,
    app_ttl_multiplier: u32,
}

impl CachePolicy {
    pub fn new(base_ttl: Duration, app_ttl_multiplier: u32) -> Self {
        Self {
            base_ttl,
            app_ttl_multiplier,
        }
    }

    pub fn from_settings(settings: &CacheSettings) -> Self {
        Self::new(
            Duration::from_secs(settings.ttl_seconds),
            settings.app_ttl_multiplier,
        )
    }

    pub fn base_ttl(&self) -> Duration {
        self.base_ttl
    }

    /// App details change rarely and live `app_ttl_multiplier` times longer.
    pub fn ttl_for(&self, namespace: Namespace) -> Duration {
        match namespace {
            Namespace::Apps => self.base_ttl.saturating_mul(self.app_ttl_multiplier),
            Namespace::Keywords | Namespace::Rankings | Namespace::Trends => self.base_ttl,
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::from_settings(&CacheSettings::default())
    }
}
