use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimediff
/// CLI application to sum the time elapsed from a start time
#[derive(Parser)]
#[command(
    name = "rtimediff",
    version = env!("CARGO_PKG_VERSION"),
    about = "Time difference sum calculator: elapsed time from a start time to each added time, plus the total, with PDF export",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or portable setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (quiet init)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check configuration file for missing fields and add defaults"
        )]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the elapsed time from the start to each given time, and the total
    Report {
        /// Start time (H:MM AM|PM, HH:MM or 'now'); default from config
        #[arg(long, short = 's', value_name = "TIME")]
        start: Option<String>,

        /// Added times, in order (e.g. "5:52 PM" 19:00)
        #[arg(value_name = "TIME", required = true)]
        times: Vec<String>,
    },

    /// Compute the report and write it to a document
    Export {
        /// Start time (H:MM AM|PM, HH:MM or 'now'); default from config
        #[arg(long, short = 's', value_name = "TIME")]
        start: Option<String>,

        /// Export format; default from config (pdf)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file; relative paths go under the configured export_dir
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Added times, in order
        #[arg(value_name = "TIME", required = true)]
        times: Vec<String>,
    },

    /// Start an interactive session (add / undo / clear / report / export)
    Session {
        /// Start time (H:MM AM|PM, HH:MM or 'now'); default from config
        #[arg(long, short = 's', value_name = "TIME")]
        start: Option<String>,
    },
}
