use std::io::{self, BufRead, Write};

use numeral::{Config, Session, session::Ending};
use tracing::instrument;

use super::terminal::Colorize;

const GREETING: &str = "Calculator started.";
const INSTRUCTIONS: &str =
    "Please enter the values you would like to have added separated by whitespaces.";
const FAREWELL: &str = "Exiting calculator.";

/// Runs a session on the standard streams.
#[instrument(level = "debug", skip(config))]
pub fn run(config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let ending = run_with(config, stdin.lock(), stdout.lock(), stderr.lock())?;
    tracing::info!(?ending, "session finished");
    Ok(())
}

fn run_with<R, W, E>(config: &Config, input: R, mut output: W, errors: E) -> io::Result<Ending>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    if config.banner {
        writeln!(output, "{}\n", GREETING.info())?;
        writeln!(output, "{}", INSTRUCTIONS.dim())?;
        writeln!(
            output,
            "{}\n",
            format!("Type \"{}\" to leave the calculator.", numeral::session::EXIT_COMMAND).dim()
        )?;
    }

    let ending = Session::new(input, &mut output, errors)
        .with_prompt(config.prompt.as_str())
        .run()?;

    writeln!(output, "{}", FAREWELL.info())?;
    Ok(ending)
}
