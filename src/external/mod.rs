pub mod client;
pub mod storefront;
