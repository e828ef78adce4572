use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lottery-analyzer",
    about = "Check weekly lottery results and analyze a ticket's history"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a ticket number over a date range or its whole available history
    Analyze {
        /// Ticket number to analyze
        #[arg(long, short = 'n', env = "LOTTERY_NUMBER")]
        ticket: Option<String>,
        /// First date to include (YYYY-MM-DD)
        #[arg(long, env = "ANALYSIS_START_DATE")]
        from: Option<String>,
        /// Last date to include (YYYY-MM-DD), defaults to today
        #[arg(long, env = "ANALYSIS_END_DATE")]
        to: Option<String>,
        /// Fetch one date at a time and stop at the edge of available history
        #[arg(long)]
        sequential: bool,
        /// Directory for the JSON result file
        #[arg(long, env = "LOTTERY_OUTPUT_DIR", default_value = ".")]
        out_dir: String,
        /// Do not write a JSON result file
        #[arg(long)]
        no_save: bool,
    },
    /// Check the latest drawing and post the result to Discord
    Check {
        #[arg(long, short = 'n', env = "LOTTERY_NUMBER")]
        ticket: Option<String>,
        #[arg(long, env = "DISCORD_WEBHOOK_URL", hide_env_values = true)]
        webhook: Option<String>,
        /// Drawing date to check (YYYY-MM-DD), defaults to the latest drawing
        #[arg(long)]
        date: Option<String>,
    },
    /// Find the most recent drawing date that has data for a ticket
    Probe {
        #[arg(long, short = 'n', env = "LOTTERY_NUMBER")]
        ticket: Option<String>,
        /// How many days back to look
        #[arg(long, default_value = "365")]
        lookback: u32,
    },
    /// List drawing dates in a range
    Dates {
        /// First date (YYYY-MM-DD)
        from: String,
        /// Last date (YYYY-MM-DD)
        to: String,
    },
}
