//! Room rate calculation
//!
//! Pure functions turning a room and a stay into a suggested charge.
//! The operator may override the suggestion when booking.

mod calculator;

pub use calculator::*;
