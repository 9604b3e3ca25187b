use std::io::IsTerminal;

use camino::Utf8PathBuf;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use exevup_info::{Level, Notation, Target};
use miette::Result;
use tracing_subscriber::EnvFilter;

pub mod bump;
pub mod config;

use config::Config;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the versioninfo.json document to bump
    #[arg(default_value = config::DEFAULT_INPUT)]
    input: Utf8PathBuf,

    /// How many version segments to write into the version strings
    #[arg(short, long, value_enum, default_value_t, env = "EXEVUP_NOTATION")]
    notation: Notation,

    /// Which version segment to increment
    #[arg(short, long, value_enum, default_value_t, env = "EXEVUP_LEVEL")]
    level: Level,

    /// Which versions to update
    #[arg(short, long, value_enum, default_value_t, env = "EXEVUP_TARGET")]
    target: Target,

    /// Where to write the result, instead of overwriting the input
    #[arg(short, long, value_name = "PATH", env = "EXEVUP_OUTPUT")]
    output: Option<Utf8PathBuf>,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            output: self.output.clone().unwrap_or_else(|| self.input.clone()),
            input: self.input.clone(),
            notation: self.notation,
            level: self.level,
            target: self.target,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::builder()
        .with_env_var("EXEVUP_LOG")
        .with_default_directive(cli.verbose.tracing_level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    bump::bump(&cli.config())?;

    Ok(())
}
