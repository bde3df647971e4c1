use super::{InvalidNumeralError, Numeral, Symbol};

/// A substitution of a run of one symbol, optionally led by another.
///
/// `lead` followed by `count` copies of `run` is rewritten as `replacement`.
#[derive(Debug, Clone, Copy)]
struct Rule {
    lead: Option<Symbol>,
    run: Symbol,
    count: usize,
    replacement: &'static str,
}

impl Rule {
    const fn carry(run: Symbol, count: usize, replacement: &'static str) -> Self {
        Self {
            lead: None,
            run,
            count,
            replacement,
        }
    }

    const fn led(lead: Symbol, run: Symbol, count: usize, replacement: &'static str) -> Self {
        Self {
            lead: Some(lead),
            run,
            count,
            replacement,
        }
    }

    /// Rewrites every occurrence of the rule in `input`.
    ///
    /// Equivalent to replacing the leftmost occurrence until none remain,
    /// for any input in descending symbol order.
    fn apply(&self, input: &str) -> String {
        let run = self.run.as_char();
        let chars: Vec<char> = input.chars().collect();
        let mut out = String::with_capacity(chars.len());

        let mut i = 0;
        while i < chars.len() {
            if chars[i] != run {
                out.push(chars[i]);
                i += 1;
                continue;
            }

            let len = chars[i..].iter().take_while(|&&c| c == run).count();
            i += len;

            let times = match self.lead {
                None => len / self.count,
                Some(lead) if len >= self.count && out.ends_with(lead.as_char()) => {
                    out.pop();
                    1
                }
                Some(_) => 0,
            };

            for _ in 0..times {
                out.push_str(self.replacement);
            }
            out.extend(std::iter::repeat_n(run, len - times * self.count));
        }

        out
    }
}

/// Full carries, resolved first.
const CARRIES: [Rule; 6] = [
    Rule::carry(Symbol::I, 5, "V"),
    Rule::carry(Symbol::V, 2, "X"),
    Rule::carry(Symbol::X, 5, "L"),
    Rule::carry(Symbol::L, 2, "C"),
    Rule::carry(Symbol::C, 5, "D"),
    Rule::carry(Symbol::D, 2, "M"),
];

/// Subtractive abbreviations. Each nine-form precedes its four-form.
const ABBREVIATIONS: [Rule; 6] = [
    Rule::led(Symbol::V, Symbol::I, 4, "IX"),
    Rule::carry(Symbol::I, 4, "IV"),
    Rule::led(Symbol::L, Symbol::X, 4, "XC"),
    Rule::carry(Symbol::X, 4, "XL"),
    Rule::led(Symbol::D, Symbol::C, 4, "CM"),
    Rule::carry(Symbol::C, 4, "CD"),
];

/// Re-abbreviates a descending, fully additive symbol run.
///
/// Carries are resolved first (`IIIII` to `V`, `VV` to `X`, and so on up to
/// `M`), then subtractive pairs are formed.
///
/// # Errors
///
/// Returns [`InvalidNumeralError`] if the result is not canonical, which
/// happens when `seq` contains foreign characters or is not in descending
/// order.
///
/// ```
/// use numeral::domain::compress;
///
/// assert_eq!(compress("DCCCCXXXXVIIII").unwrap().as_str(), "CMXLIX");
/// ```
pub fn compress(seq: &str) -> Result<Numeral, InvalidNumeralError> {
    let carried = CARRIES
        .iter()
        .fold(seq.to_string(), |acc, rule| rule.apply(&acc));
    let abbreviated = ABBREVIATIONS
        .iter()
        .fold(carried, |acc, rule| rule.apply(&acc));

    tracing::trace!(input = seq, compressed = %abbreviated, "compressed symbol run");
    Numeral::new(abbreviated)
}
