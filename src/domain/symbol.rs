use std::fmt;

/// A single Roman numeral symbol.
///
/// Variants are declared from smallest to largest magnitude, so the derived
/// ordering is the symbol rank used throughout the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// One
    I,
    /// Five
    V,
    /// Ten
    X,
    /// Fifty
    L,
    /// One hundred
    C,
    /// Five hundred
    D,
    /// One thousand
    M,
}

impl Symbol {
    /// All symbols, smallest first.
    pub const ORDER: [Self; 7] = [
        Self::I,
        Self::V,
        Self::X,
        Self::L,
        Self::C,
        Self::D,
        Self::M,
    ];

    /// Looks up the symbol written as `c`.
    ///
    /// Only the uppercase letters are recognised.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Self::I),
            'V' => Some(Self::V),
            'X' => Some(Self::X),
            'L' => Some(Self::L),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'M' => Some(Self::M),
            _ => None,
        }
    }

    /// The letter used to write this symbol.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'I',
            Self::V => 'V',
            Self::X => 'X',
            Self::L => 'L',
            Self::C => 'C',
            Self::D => 'D',
            Self::M => 'M',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn order_is_ascending() {
        assert!(Symbol::ORDER.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn chars_round_trip() {
        for symbol in Symbol::ORDER {
            assert_eq!(Symbol::from_char(symbol.as_char()), Some(symbol));
        }
    }

    #[test_case('i'; "lowercase")]
    #[test_case('A'; "not a numeral")]
    #[test_case(' '; "whitespace")]
    fn unknown_chars_are_rejected(c: char) {
        assert_eq!(Symbol::from_char(c), None);
    }
}
