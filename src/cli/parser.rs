use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for routeslot
#[derive(Parser)]
#[command(
    name = "routeslot",
    version = env!("CARGO_PKG_VERSION"),
    about = "Suggest appointment slots that add the least travel to your calendar",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or invalid fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a calendar event
    Add {
        /// Date of the event (YYYY-MM-DD)
        date: String,
        /// Start time (HH:MM)
        start: String,
        /// End time (HH:MM)
        end: String,

        #[arg(long, short, default_value = "", help = "Event title")]
        title: String,

        #[arg(long, short, help = "Free-text address of the event")]
        location: Option<String>,

        #[arg(long, requires_all = ["long", "location"], allow_hyphen_values = true, help = "Latitude to cache for --location")]
        lat: Option<f64>,

        #[arg(long, requires_all = ["lat", "location"], allow_hyphen_values = true, help = "Longitude to cache for --location")]
        long: Option<f64>,

        #[arg(long, short, help = "Calendar name (default from config)")]
        calendar: Option<String>,
    },

    /// Delete a calendar event by id
    Del {
        /// Event id (see `list`)
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// List calendar events
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
        /// - start:end            → range of the above (e.g. "2025-06-01:2025-06-10")
        ///
        /// If omitted, the current month is listed.
        #[arg(long, short)]
        period: Option<String>,

        /// Only these calendars (repeatable)
        #[arg(long = "calendar", short = 'c')]
        calendars: Vec<String>,
    },

    /// Manage the location cache
    Geo {
        #[command(subcommand)]
        action: GeoAction,
    },

    /// Import events from a CSV file (title,start,end,location,calendar)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export events in CSV or JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Period to export (same syntax as `list --period`, or "all")
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Suggest time slots for a new appointment
    Suggest {
        #[arg(long, short, help = "Address of the new appointment")]
        location: Option<String>,

        #[arg(long, requires = "long", allow_hyphen_values = true, help = "Latitude of the new appointment")]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_hyphen_values = true, help = "Longitude of the new appointment")]
        long: Option<f64>,

        /// Period to search (same syntax as `list --period`). Default: today + 6 days
        #[arg(long, short)]
        period: Option<String>,

        /// Only consider these calendars (repeatable)
        #[arg(long = "calendar", short = 'c')]
        calendars: Vec<String>,

        /// Show at most N suggestions
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,

        /// Print every gap decision to stderr
        #[arg(long)]
        trace: bool,

        /// Book suggestion #N (1-based) as a new event
        #[arg(long, value_name = "N", requires = "title")]
        book: Option<usize>,

        /// Title for the booked event
        #[arg(long, short)]
        title: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum GeoAction {
    /// Store coordinates for an address (overwrites)
    Set {
        location: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        long: f64,
    },
    /// Resolve an address through the cache (or a "lat,long" literal)
    Get { location: String },
    /// List cached addresses
    List,
}
