pub mod number;
pub mod time;
pub mod validate;
