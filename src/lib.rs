//! aso-rs library
//!
//! App Store optimisation analytics API: a cached proxy over the iTunes
//! storefront plus keyword competition metrics.

use shadow_rs::shadow;
shadow!(build);

pub mod analysis;
pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
