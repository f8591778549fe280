use clap::{Parser, Subcommand};

/// Command-line interface definition for proglogger
/// CLI application to track housing construction progress per block
#[derive(Parser)]
#[command(
    name = "proglogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track construction progress per block, mark entries as reported, and export styled Excel recaps",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or custom locations)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data files
    Init,

    /// Add a new progress entry for a block
    Add {
        /// Block name (e.g. "A1")
        #[arg(long = "blok")]
        blok: String,

        /// Work item description
        #[arg(long = "item")]
        item: String,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Completion percentage (0-100)
        #[arg(long = "percent", value_parser = clap::value_parser!(u8).range(0..=100))]
        percent: u8,

        /// Contract value in Rupiah (Nilai SPK)
        #[arg(long = "value", default_value_t = 0)]
        value: u64,
    },

    /// List progress entries
    List {
        #[arg(long = "reported", help = "Show reported entries instead of pending ones")]
        reported: bool,
    },

    /// Mark a pending entry as reported
    Report {
        /// Entry number as shown by `list`
        no: usize,
    },

    /// Show the average progress per block as a bar chart
    Recap,

    /// Export the reported entries to a styled Excel workbook
    Export {
        #[arg(long, value_name = "FILE", help = "Output file (default: laporan_progress.xlsx)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
