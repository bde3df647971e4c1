//! Roman numeral arithmetic.
//!
//! Numerals are added symbolically: each operand is expanded into a purely
//! additive run of symbols, the runs are concatenated and sorted, and the
//! result is compressed back into canonical subtractive notation.

mod symbol;
pub use symbol::Symbol;

/// The validated numeral value type and grammar check.
pub mod numeral;
pub use numeral::{InvalidNumeralError, Numeral, is_valid};

mod expand;
pub use expand::expand;

mod sort;
pub use sort::sort_descending;

mod compress;
pub use compress::compress;

/// Addition of two or more numerals.
pub mod add;
pub use add::{add, add_two, sum};

mod config;
pub use config::Config;

#[cfg(test)]
mod reference;
