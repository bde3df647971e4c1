use nonempty::NonEmpty;

use super::{InvalidNumeralError, Numeral, compress, expand, sort_descending};

/// Errors that can occur while summing numerals.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// No numerals were supplied.
    #[error("at least one numeral is required")]
    Empty,

    /// An intermediate form failed re-validation.
    #[error(transparent)]
    Numeral(#[from] InvalidNumeralError),
}

/// Adds two numerals symbolically.
///
/// Both numerals are expanded, concatenated, sorted and compressed again.
///
/// # Errors
///
/// Only fails if the intermediate forms are inconsistent, which indicates a
/// bug rather than bad input.
pub fn add_two(a: &Numeral, b: &Numeral) -> Result<Numeral, InvalidNumeralError> {
    let mut combined = expand(a);
    combined.push_str(&expand(b));
    let sorted = sort_descending(&combined);
    tracing::trace!(%a, %b, %sorted, "adding numerals");
    compress(&sorted)
}

/// Sums numerals from left to right.
///
/// # Errors
///
/// See [`add_two`].
///
/// ```
/// use nonempty::nonempty;
/// use numeral::{Numeral, domain::add};
///
/// let numerals: nonempty::NonEmpty<Numeral> = nonempty![
///     "IV".parse().unwrap(),
///     "VII".parse().unwrap(),
///     "XLIX".parse().unwrap(),
///     "CXCIX".parse().unwrap(),
/// ];
/// assert_eq!(add(&numerals).unwrap().as_str(), "CCLIX");
/// ```
pub fn add(numerals: &NonEmpty<Numeral>) -> Result<Numeral, InvalidNumeralError> {
    numerals
        .tail
        .iter()
        .try_fold(numerals.head.clone(), |total, next| add_two(&total, next))
}

/// Sums a slice of numerals from left to right.
///
/// # Errors
///
/// Returns [`Error::Empty`] if `numerals` is empty, otherwise see
/// [`add_two`].
pub fn sum(numerals: &[Numeral]) -> Result<Numeral, Error> {
    let numerals = NonEmpty::from_slice(numerals).ok_or(Error::Empty)?;
    let total = add(&numerals)?;
    tracing::debug!(count = numerals.len(), %total, "summed numerals");
    Ok(total)
}
