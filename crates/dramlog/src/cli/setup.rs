use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "dramlog",
    bin_name = "dramlog",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Command-line pure-alcohol intake tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use DIR as the data directory instead of the OS default
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log a drink
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Drink label (e.g. "IPA")
        name: String,

        /// Alcohol strength in percent (0-100)
        strength: String,

        /// Volume in ml (at least 1)
        volume: String,
    },

    /// List logged drinks, newest first
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Print the running total of pure alcohol
    #[command(display_order = 3)]
    Total,

    /// Delete one or more drinks by list index
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Indexes from `dramlog list` (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete all drinks and remove the storage slot
    #[command(display_order = 5)]
    Clear {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
