use clap::{Parser, Subcommand};
use std::path::PathBuf;
use anyhow::Result;

mod config;
mod commands;
mod error;

use config::Config;
use error::{print_error_and_exit, CliError};

#[derive(Parser)]
#[command(name = "armprox")]
#[command(about = "ArmProx - per-chromosome-arm proximity counting")]
#[command(version)]
#[command(long_about = "
ArmProx reads tab-separated sequence records (id, chromosome arm locus, (x,y) position),
sorts them by locus and counts, for every chromosome arm, the record pairs lying within
a distance threshold of each other.

Examples:
  armprox count --input inputs/input1.txt --k 1.5
  armprox count --input records.tsv --k 2 --output results/arms.tsv
  armprox config --example > armprox.toml
  armprox --config custom.toml config --save armprox.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count close record pairs on each chromosome arm
    Count {
        /// Tab-separated record file
        #[arg(short, long, required = true)]
        input: PathBuf,

        /// Inclusive distance threshold
        #[arg(short, long, required = true, allow_negative_numbers = true, value_parser = parse_threshold)]
        k: f64,

        /// Output file (defaults to <output.directory>/<output.prefix><input name>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        /// Print an example armprox.toml
        #[arg(long)]
        example: bool,

        /// Write the effective configuration to this file instead of printing it
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let k: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !k.is_finite() || k < 0.0 {
        return Err(format!("threshold must be a finite, non-negative number (got {})", value));
    }
    Ok(k)
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Count { input, k, output } => {
            let written = commands::count::execute(&config, input, k, output)?;
            if !cli.quiet {
                println!("\nDone!\n");
                println!("The output can be found at :");
                println!("{}\n", written.display());
            }
        }

        Commands::Config { example, save } => {
            if example {
                print!("{}", Config::example_toml()?);
            } else if let Some(path) = save {
                config.save_to_file(&path)?;
                log::info!("Configuration written to: {}", path.display());
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        match err.downcast_ref::<CliError>() {
            Some(cli_err) => print_error_and_exit(cli_err),
            None => {
                eprintln!("Error: {:#}", err);
                std::process::exit(1);
            }
        }
    }
}
