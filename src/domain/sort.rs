use std::cmp::Reverse;

use super::Symbol;

/// Orders symbols from largest to smallest.
///
/// The sort is stable. Characters that are not numeral symbols sort last.
///
/// ```
/// use numeral::domain::sort_descending;
///
/// assert_eq!(sort_descending("IIIIXXXXVII"), "XXXXVIIIIII");
/// ```
#[must_use]
pub fn sort_descending(seq: &str) -> String {
    let mut chars: Vec<char> = seq.chars().collect();
    // `None` orders below every symbol, so foreign characters sort last.
    chars.sort_by_key(|&c| Reverse(Symbol::from_char(c)));
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("", ""; "empty")]
    #[test_case("I", "I"; "single")]
    #[test_case("IIIIXXXXVII", "XXXXVIIIIII"; "mixed")]
    #[test_case("IVXLCDM", "MDCLXVI"; "ascending input")]
    #[test_case("MDCLXVI", "MDCLXVI"; "already sorted")]
    fn sorts_by_rank(input: &str, expected: &str) {
        assert_eq!(sort_descending(input), expected);
    }

    #[test]
    fn unknown_characters_sort_last_in_original_order() {
        assert_eq!(sort_descending("a?IbM"), "MIa?b");
    }
}
