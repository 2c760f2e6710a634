//! Response cache.
//!
//! A volatile, process-lifetime store keyed by [`CacheKey`]. Entries carry
//! the time they were fetched and are considered fresh while younger than
//! the TTL of their [`Namespace`]:
//!
//! | Namespace  | TTL                              |
//! |------------|----------------------------------|
//! | `keywords` | `cache.ttl_seconds`              |
//! | `rankings` | `cache.ttl_seconds`              |
//! | `apps`     | `cache.ttl_seconds * app_ttl_multiplier` |
//!
//! ```toml
//! [cache]
//! ttl_seconds = 3600
//! app_ttl_multiplier = 6
//! single_flight = true
//! ```

mod clock;
mod error;
mod key;
mod policy;
mod store;

pub use clock::{Clock, SystemClock};
pub use error::CacheError;
pub use key::{CacheKey, Namespace};
pub use policy::CachePolicy;
pub use store::{CacheEntry, CacheStore, KeyGuard};

#[cfg(test)]
pub use clock::ManualClock;
