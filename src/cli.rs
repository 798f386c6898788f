use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "parktrack", version, about = "US National Parks visited tracker")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, global = true, help = "Verbose logging on stderr")]
    pub verbose: bool,
    #[arg(long, global = true, help = "Park registry CSV (UNIT_CODE, UNIT_NAME, STATE)")]
    pub parks: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Coordinate registry CSV (type, unit, code, latitude, longitude)"
    )]
    pub coords: Option<PathBuf>,
    #[arg(long, global = true, help = "Visited store JSON file")]
    pub store: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filtered park view with visited flags and progress summary
    View(QueryArgs),
    /// Whole canonical park set with visited flags
    Table,
    /// Parks that found no coordinate match
    Gaps,
    /// Visited/total progress
    Summary,
    /// Currently visited parks
    Visited,
    /// Replace the visited set with exactly these ids
    Select { ids: Vec<String> },
    /// Add ids to the visited set
    Mark {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Remove ids from the visited set
    Unmark {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Load datasets and store, report counts
    Check,
}

#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    #[arg(long, default_value = "", help = "Match park name or state abbreviation")]
    pub search: String,
    #[arg(long, default_value_t = false)]
    pub unvisited_only: bool,
}
