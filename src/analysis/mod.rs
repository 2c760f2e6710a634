//! Pure derivations over fetched data.

pub mod keyword;
pub mod trend;
