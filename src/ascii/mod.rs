pub mod bounded;
pub mod digit;

pub use bounded::{Bounds, bounded_digits};
pub use digit::{digits, is_digit};
