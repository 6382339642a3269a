use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for jobtracker
#[derive(Parser)]
#[command(
    name = "jobtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple job application tracker: record applications, follow-ups and statistics in a CSV table",
    long_about = None
)]
pub struct Cli {
    /// Override the applications table path (useful for tests or a custom table)
    #[arg(global = true, long = "table")]
    pub table: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the applications table
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Write missing fields back to the configuration file")]
        migrate: bool,

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

    /// Add a new job application
    Add {
        #[arg(long, help = "Application date (YYYY-MM-DD); blank or invalid means today")]
        date: Option<String>,

        #[arg(long, help = "Company name")]
        company: Option<String>,

        #[arg(long, help = "Role applied for")]
        role: Option<String>,

        #[arg(long, help = "Application method (e.g. email, portal, referral)")]
        method: Option<String>,

        #[arg(long, help = "Contact person")]
        contact: Option<String>,

        #[arg(
            long,
            help = "Status (Applied, Interview, Tech Assessment, Case Study, Offer, Rejected, or any text)"
        )]
        status: Option<String>,

        #[arg(
            long = "follow-up",
            help = "Follow-up date (YYYY-MM-DD); invalid dates are left blank"
        )]
        follow_up: Option<String>,

        #[arg(long, help = "Free notes")]
        notes: Option<String>,
    },

    /// List applications, optionally filtered
    List {
        #[arg(long, help = "Filter by company (case-insensitive substring)")]
        company: Option<String>,

        #[arg(long, help = "Filter by exact status")]
        status: Option<String>,
    },

    /// Show applications whose follow-up date is due
    Followups {
        #[arg(
            long = "as-of",
            value_name = "DATE",
            help = "Reference date (YYYY-MM-DD), default today"
        )]
        as_of: Option<String>,
    },

    /// Show application statistics
    Stats {
        #[arg(
            long = "as-of",
            value_name = "DATE",
            help = "Reference date for pending follow-ups (YYYY-MM-DD), default today"
        )]
        as_of: Option<String>,
    },

    /// Delete an application by its list number
    Del {
        /// Number shown by `list` (1-based)
        index: usize,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Interactive menu
    Menu,

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print the audit log")]
        print: bool,
    },

    /// Create a backup copy of the applications table
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup (zip)")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup without asking")]
        force: bool,
    },

    /// Export applications
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
