use std::path::{Path, PathBuf};

mod add;
mod interactive;
mod terminal;

use clap::ArgAction;
use numeral::Config;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(self.config.as_deref())?;
        terminal::allow_color(config.color);

        self.command
            .unwrap_or(Command::Interactive)
            .run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries results, so logs go to stderr
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[instrument(level = "debug")]
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let config = Config::load(path).map_err(|e| anyhow::anyhow!("{e} ({})", path.display()))?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Start an interactive session (default)
    ///
    /// Enter numerals separated by whitespace to have them added. Type
    /// "exit" to leave.
    Interactive,

    /// Add numerals once and print the result
    Add(add::Command),

    /// Write a configuration file with the default settings
    Init(Init),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Interactive => interactive::run(config)?,
            Self::Add(command) => command.run(),
            Self::Init(command) => command.run()?,
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Init {
    /// Where to write the configuration file
    #[arg(default_value = "roman-calc.toml")]
    path: PathBuf,
}

impl Init {
    #[instrument]
    fn run(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            anyhow::bail!(
                "Configuration file already exists: {}",
                self.path.display()
            );
        }

        Config::default()
            .save(&self.path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", self.path.display()))?;

        println!("Created {}", self.path.display());
        Ok(())
    }
}
