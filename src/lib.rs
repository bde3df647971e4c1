//! Roman numeral addition.
//!
//! Numerals are validated on construction and summed symbolically, without
//! converting to integers.

pub mod domain;
pub use domain::{Config, InvalidNumeralError, Numeral, Symbol};

/// Interactive read-evaluate-print sessions.
pub mod session;
pub use session::{LineError, Session, evaluate_line};
