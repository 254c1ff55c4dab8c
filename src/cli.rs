use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "archgate", version, about = "Application architecture quality gate")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, global = true, help = "Log progress details to stderr")]
    pub verbose: bool,
    #[arg(short, long, global = true, help = "Log debug details to stderr")]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Fetch {
        #[command(subcommand)]
        command: FetchCommands,
    },
    Check {
        #[arg(long)]
        artifact: PathBuf,
        #[arg(
            long,
            value_enum,
            ignore_case = true,
            help = "Worst acceptable rating (default: B)"
        )]
        min_rating: Option<Rating>,
        #[arg(long, help = "Most violations tolerated (default: 5)")]
        max_violations: Option<u64>,
        #[arg(long, help = "TOML file with a [gate] thresholds table")]
        config: Option<PathBuf>,
    },
    Show {
        #[arg(long)]
        artifact: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum FetchCommands {
    Api {
        #[arg(long)]
        app: String,
        #[arg(long)]
        artifacts: PathBuf,
        #[arg(long)]
        host: String,
        #[arg(long)]
        token: String,
        #[arg(long)]
        output: PathBuf,
    },
    Overview {
        #[arg(long)]
        app: String,
        #[arg(long)]
        host: String,
        #[arg(long)]
        token: String,
        #[arg(long)]
        output: PathBuf,
    },
    Report {
        #[arg(long)]
        app: String,
        #[arg(long)]
        artifacts: PathBuf,
        #[arg(long)]
        host: String,
        #[arg(long)]
        token: String,
        #[arg(long)]
        output: PathBuf,
    },
    Pdf {
        #[arg(long)]
        app: String,
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
}

/// Architecture rating scale, best to worst. The derived order makes
/// "at or better than the floor" a plain `<=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Rating {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Rating {
    /// Accepts any spacing/case variant of the six letters, nothing else.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Rating::A),
            "B" => Some(Rating::B),
            "C" => Some(Rating::C),
            "D" => Some(Rating::D),
            "E" => Some(Rating::E),
            "F" => Some(Rating::F),
            _ => None,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Rating::A => "A",
            Rating::B => "B",
            Rating::C => "C",
            Rating::D => "D",
            Rating::E => "E",
            Rating::F => "F",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}
