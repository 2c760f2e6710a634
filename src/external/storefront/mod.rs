//! Upstream app storefront.
//!
//! [`StorefrontProvider`] is the seam the services depend on;
//! [`ItunesStorefront`] talks to the public iTunes Search API and RSS feeds.

mod itunes;
mod normalize;
mod provider;
mod types;

#[cfg(test)]
pub mod stub;

pub use itunes::ItunesStorefront;
pub use provider::StorefrontProvider;
