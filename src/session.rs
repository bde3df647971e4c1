//! Line-oriented calculator sessions.
//!
//! Each input line holds whitespace-separated numerals. Valid lines print
//! their sum, invalid lines print an error, and the session ends on `exit`
//! or at end of input.

use std::{
    fmt::Write as _,
    io::{self, BufRead, Write},
};

use crate::domain::{Numeral, add};

/// The command that ends a session, matched case-insensitively.
pub const EXIT_COMMAND: &str = "exit";

/// Minimum number of numerals on a line.
const MIN_NUMERALS: usize = 2;

/// Reasons a line could not be evaluated.
///
/// The messages are shown to the user verbatim.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LineError {
    /// Fewer than two tokens were entered.
    #[error("You must enter 2 or more numerals!")]
    TooFewNumerals,

    /// One or more tokens are not canonical numerals.
    #[error("Invalid numerals: {}", list_tokens(.0))]
    InvalidNumerals(Vec<String>),

    /// The symbolic addition produced an inconsistent result.
    #[error("An error occurred in addition!")]
    Addition(#[from] add::Error),
}

fn list_tokens(tokens: &[String]) -> String {
    tokens.iter().fold(String::new(), |mut out, token| {
        let _ = write!(out, "{token} ");
        out
    })
}

/// Validates and sums the numerals on one line.
///
/// # Errors
///
/// Returns [`LineError::TooFewNumerals`] for lines with fewer than two
/// tokens, and [`LineError::InvalidNumerals`] listing every invalid token if
/// any token fails validation. No sum is attempted in either case.
///
/// ```
/// use numeral::session::{LineError, evaluate_line};
///
/// assert_eq!(evaluate_line("IV VII").unwrap().as_str(), "XI");
/// assert_eq!(evaluate_line("IV"), Err(LineError::TooFewNumerals));
/// ```
pub fn evaluate_line(line: &str) -> Result<Numeral, LineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_NUMERALS {
        return Err(LineError::TooFewNumerals);
    }

    let mut numerals = Vec::with_capacity(tokens.len());
    let mut invalid = Vec::new();
    for token in tokens {
        match Numeral::try_from(token) {
            Ok(numeral) => numerals.push(numeral),
            Err(e) => invalid.push(e.into_value()),
        }
    }

    if !invalid.is_empty() {
        tracing::debug!(?invalid, "rejected line");
        return Err(LineError::InvalidNumerals(invalid));
    }

    Ok(add::sum(&numerals)?)
}

/// Whether `line` asks to end the session.
#[must_use]
pub fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_COMMAND)
}

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The exit command was entered.
    Exit,
    /// The input stream closed.
    EndOfInput,
}

/// A read-evaluate-print loop over arbitrary streams.
///
/// Results go to `output`, per-line errors go to `errors`.
#[derive(Debug)]
pub struct Session<R, W, E> {
    input: R,
    output: W,
    errors: E,
    prompt: String,
}

impl<R, W, E> Session<R, W, E>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    /// Creates a session without a prompt.
    #[must_use]
    pub const fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
            prompt: String::new(),
        }
    }

    /// Prints `prompt` before reading each line.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Processes lines until the exit command or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from or writing to the streams fails.
    /// Invalid lines are reported on the error stream and never end the
    /// session.
    pub fn run(&mut self) -> io::Result<Ending> {
        let mut line = String::new();
        loop {
            if !self.prompt.is_empty() {
                write!(self.output, "{}", self.prompt)?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("input closed");
                return Ok(Ending::EndOfInput);
            }

            if is_exit(&line) {
                return Ok(Ending::Exit);
            }

            match evaluate_line(&line) {
                Ok(total) => writeln!(self.output, "Result: {total}")?,
                Err(e) => writeln!(self.errors, "{e}")?,
            }
        }
    }

    /// Consumes the session, returning the output and error streams.
    #[must_use]
    pub fn into_streams(self) -> (W, E) {
        (self.output, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn run(input: &str) -> (Ending, String, String) {
        let mut session = Session::new(input.as_bytes(), Vec::new(), Vec::new());
        let ending = session.run().unwrap();
        let (output, errors) = session.into_streams();
        (
            ending,
            String::from_utf8(output).unwrap(),
            String::from_utf8(errors).unwrap(),
        )
    }

    #[test]
    fn sums_a_line() {
        let (ending, output, errors) = run("IV VII\nexit\n");
        assert_eq!(ending, Ending::Exit);
        assert_eq!(output, "Result: XI\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn single_numeral_is_rejected() {
        let (_, output, errors) = run("IV\nexit\n");
        assert!(output.is_empty());
        assert_eq!(errors, "You must enter 2 or more numerals!\n");
    }

    #[test]
    fn invalid_numerals_are_listed() {
        let (_, output, errors) = run("IV ABC\nexit\n");
        assert!(output.is_empty());
        assert_eq!(errors, "Invalid numerals: ABC \n");
    }

    #[test_case("exit"; "lowercase")]
    #[test_case("EXIT"; "uppercase")]
    #[test_case("Exit"; "mixed case")]
    #[test_case("  exit  "; "surrounding whitespace")]
    fn exit_ends_the_session(command: &str) {
        let input = format!("{command}\nIV VII\n");
        let (ending, output, errors) = run(&input);
        assert_eq!(ending, Ending::Exit);
        assert!(output.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (ending, output, errors) = run("IV\nIIX IV X\nI I\n");
        assert_eq!(ending, Ending::EndOfInput);
        assert_eq!(output, "Result: II\n");
        assert_eq!(
            errors,
            "You must enter 2 or more numerals!\nInvalid numerals: IIX \n"
        );
    }

    #[test]
    fn prompt_precedes_each_read() {
        let mut session =
            Session::new(b"I I\nexit\n".as_slice(), Vec::new(), Vec::new()).with_prompt("> ");
        session.run().unwrap();
        let (output, _) = session.into_streams();
        assert_eq!(String::from_utf8(output).unwrap(), "> Result: II\n> ");
    }

    #[test_case("IV VII XLIX CXCIX", "CCLIX"; "four numerals")]
    #[test_case("  X\tX  ", "XX"; "mixed whitespace")]
    #[test_case("MM MM", "MMMM"; "thousands")]
    fn evaluates_valid_lines(line: &str, expected: &str) {
        assert_eq!(evaluate_line(line).unwrap().as_str(), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    #[test_case("XIV"; "one token")]
    #[test_case("ABC"; "one invalid token")]
    #[test_case(" IV"; "leading whitespace adds no token")]
    #[test_case("IV\t \n"; "trailing whitespace adds no token")]
    fn too_few_tokens(line: &str) {
        assert_eq!(evaluate_line(line), Err(LineError::TooFewNumerals));
    }

    #[test]
    fn every_invalid_token_is_reported() {
        let error = evaluate_line("iv X VV C xyz").unwrap_err();
        assert_eq!(
            error,
            LineError::InvalidNumerals(vec!["iv".into(), "VV".into(), "xyz".into()])
        );
        assert_eq!(error.to_string(), "Invalid numerals: iv VV xyz ");
    }

    #[test]
    fn addition_failure_message() {
        let error = LineError::from(add::Error::Empty);
        assert_eq!(error.to_string(), "An error occurred in addition!");
    }
}
