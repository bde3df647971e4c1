use super::{Numeral, Symbol};

/// Fully additive forms of the six subtractive pairs.
const EXPANSIONS: [(&str, &str); 6] = [
    ("IV", "IIII"),
    ("IX", "VIIII"),
    ("XL", "XXXX"),
    ("XC", "LXXXX"),
    ("CD", "CCCC"),
    ("CM", "DCCCC"),
];

fn expansion_of(pair: &str) -> Option<&'static str> {
    EXPANSIONS
        .iter()
        .find_map(|&(abbreviated, expanded)| (abbreviated == pair).then_some(expanded))
}

/// Rewrites a numeral without subtractive pairs.
///
/// The result is a run of symbols whose values simply add up, e.g.
/// `XLIX` becomes `XXXXVIIII`. It is generally not a canonical numeral
/// itself.
///
/// ```
/// use numeral::{Numeral, domain::expand};
///
/// let numeral: Numeral = "CM".parse().unwrap();
/// assert_eq!(expand(&numeral), "DCCCC");
/// ```
#[must_use]
pub fn expand(numeral: &Numeral) -> String {
    let symbols: Vec<Symbol> = numeral.chars().filter_map(Symbol::from_char).collect();
    let mut out = String::with_capacity(symbols.len() * 2);

    let mut i = 0;
    while i < symbols.len() {
        let current = symbols[i];
        match symbols.get(i + 1) {
            Some(&next) if current < next => {
                let pair: String = [current.as_char(), next.as_char()].iter().collect();
                // A valid numeral only ever contains the six known pairs.
                out.push_str(expansion_of(&pair).unwrap_or(pair.as_str()));
                i += 2;
            }
            _ => {
                out.push(current.as_char());
                i += 1;
            }
        }
    }

    tracing::trace!(numeral = %numeral, expanded = %out, "expanded numeral");
    out
}
