use crate::app_config::{AppConfig, LfsrScenario, MisrScenario};
use crate::bist::LfsrMode;
use crate::error::Result;
use crate::runner::{self, Selection};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// A bit list written either as `1,0,0,1,1` or as `10011`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitList(pub Vec<u8>);

impl FromStr for BitList {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parsed: std::result::Result<Vec<u8>, _> = if s.contains(',') {
            s.split(',')
                .map(|t| t.trim().parse::<u8>().map_err(|e| format!("`{}`: {}", t, e)))
                .collect()
        } else {
            s.chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|d| d as u8)
                        .ok_or_else(|| format!("`{}` is not a digit", c))
                })
                .collect()
        };
        parsed.map(BitList)
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "LFSR test-pattern generator and MISR signature analyzer", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates test vectors with an LFSR
    Lfsr {
        /// Register width in bits
        #[arg(short, long)]
        width: usize,

        /// Stage taps h1..h(n-1), e.g. 1,0,1,0
        #[arg(short, long, value_delimiter = ',')]
        taps: Vec<u8>,

        /// Initial register contents q0..q(n-1)
        #[arg(short, long, value_delimiter = ',', required = true)]
        seed: Vec<u8>,

        /// Number of test vectors, seed included
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,

        /// Wiring: 1-to-m or m-to-1
        #[arg(short, long, default_value = "1-to-m")]
        mode: LfsrMode,
    },
    /// Compresses a response sequence into a MISR signature
    Misr {
        /// Register width in bits
        #[arg(short, long)]
        width: usize,

        /// Stage taps h1..h(n-1)
        #[arg(short, long, value_delimiter = ',')]
        taps: Vec<u8>,

        /// Initial register contents q0..q(n-1)
        #[arg(short, long, value_delimiter = ',', required = true)]
        seed: Vec<u8>,

        /// One response vector per cycle, repeat for each cycle
        #[arg(short, long = "response")]
        responses: Vec<BitList>,
    },
    /// Runs the scenarios of a TOML file
    Run {
        /// Path to the scenario file
        #[arg(short, long)]
        config: PathBuf,

        /// Restrict to one kind of scenario
        #[arg(long, value_enum, default_value_t = Selection::All)]
        only: Selection,

        /// Run independent scenarios on the rayon pool
        #[arg(long, default_value_t = false)]
        parallel: bool,
    },
    /// Runs the built-in 5-bit reference scenarios
    Demo {
        /// Restrict to one kind of scenario
        #[arg(long, value_enum, default_value_t = Selection::All)]
        only: Selection,
    },
}

/// Executes a parsed command and returns the text to print.
pub fn execute(command: &Commands) -> Result<String> {
    let (config, only, parallel) = match command {
        Commands::Lfsr {
            width,
            taps,
            seed,
            count,
            mode,
        } => {
            let sc = LfsrScenario {
                name: "lfsr".to_string(),
                width: *width,
                taps: taps.clone(),
                seed: seed.clone(),
                count: *count,
                mode: *mode,
            };
            return Ok(runner::run_lfsr(&sc)?.render());
        }
        Commands::Misr {
            width,
            taps,
            seed,
            responses,
        } => {
            let sc = MisrScenario {
                name: "misr".to_string(),
                width: *width,
                taps: taps.clone(),
                seed: seed.clone(),
                responses: responses.iter().map(|r| r.0.clone()).collect(),
            };
            return Ok(runner::run_misr(&sc)?.render());
        }
        Commands::Run {
            config,
            only,
            parallel,
        } => (AppConfig::from_file(config)?, *only, *parallel),
        Commands::Demo { only } => (AppConfig::default(), *only, false),
    };

    let outcomes = runner::run(&config, only, parallel)?;
    Ok(outcomes
        .iter()
        .map(|o| o.render())
        .collect::<Vec<_>>()
        .join("\n"))
}
