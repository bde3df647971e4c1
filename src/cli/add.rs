use numeral::{LineError, Numeral, evaluate_line};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The numerals to add (at least two)
    numerals: Vec<String>,
}

impl Command {
    #[instrument]
    pub fn run(self) {
        let total = self.total().unwrap_or_else(|e| {
            eprintln!("{}", e.to_string().warning());
            std::process::exit(1);
        });

        println!("{}", format!("Result: {total}").success());
    }

    fn total(&self) -> Result<Numeral, LineError> {
        evaluate_line(&self.numerals.join(" "))
    }
}
