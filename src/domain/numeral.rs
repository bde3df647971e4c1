use std::{fmt, ops::Deref, str::FromStr, sync::LazyLock};

use regex::Regex;

/// Canonical subtractive-notation grammar.
///
/// Any number of leading `M`s is accepted; the remaining groups cover the
/// hundreds, tens and units. Every group is optional, so the empty string
/// (zero) is valid.
static GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M*(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("numeral grammar is a valid regex")
});

/// Checks whether `s` is a canonical Roman numeral.
///
/// The whole string must match; partial matches are rejected.
#[must_use]
pub fn is_valid(s: &str) -> bool {
    GRAMMAR.is_match(s)
}

/// A validated Roman numeral in canonical subtractive notation.
///
/// There is no way to obtain a `Numeral` holding a string that fails
/// [`is_valid`].
///
/// # Examples
///
/// ```
/// use numeral::Numeral;
///
/// let numeral: Numeral = "XLIX".parse().unwrap();
/// assert_eq!(numeral.as_str(), "XLIX");
///
/// assert!("IIX".parse::<Numeral>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Numeral(String);

impl Numeral {
    /// Validates `value` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNumeralError`] carrying `value` if it is not a
    /// canonical numeral.
    pub fn new(value: String) -> Result<Self, InvalidNumeralError> {
        if is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidNumeralError(value))
        }
    }

    /// Returns the numeral exactly as it was constructed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl FromStr for Numeral {
    type Err = InvalidNumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<&str> for Numeral {
    type Error = InvalidNumeralError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl TryFrom<String> for Numeral {
    type Error = InvalidNumeralError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Numeral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Numeral {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a canonical Roman numeral.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid numeral value \"{0}\"")]
pub struct InvalidNumeralError(String);

impl InvalidNumeralError {
    /// The string that failed validation.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Consumes the error, returning the offending string.
    #[must_use]
    pub fn into_value(self) -> String {
        self.0
    }
}
