use clap::{Parser, Subcommand};

use crate::export::ExportFormat;
use crate::models::kind::RecordKind;

/// Command-line interface definition for stitchbook
/// CLI application to keep a tailoring studio's client intake on local disk
#[derive(Parser)]
#[command(
    name = "stitchbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Client intake for tailoring studios: measurements, bookings, drafts and exports",
    long_about = None
)]
pub struct Cli {
    /// Override store file path (useful for tests or a custom store)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Submit a measurement intake form
    Measure {
        #[arg(long, help = "Client name (2-50 characters, letters and spaces)")]
        name: Option<String>,

        #[arg(long, help = "Client email address")]
        email: Option<String>,

        #[arg(long, help = "Contact number")]
        phone: Option<String>,

        #[arg(long, help = "Bust measurement (positive number)")]
        bust: Option<String>,

        #[arg(long, help = "Waist measurement (positive number)")]
        waist: Option<String>,

        #[arg(long = "shoulder-width", help = "Shoulder width (positive number)")]
        shoulder_width: Option<String>,

        #[arg(long = "sleeve-length", help = "Sleeve length (positive number)")]
        sleeve_length: Option<String>,

        #[arg(long, help = "Requested service, e.g. Blouse, Dress, Suit")]
        service: Option<String>,

        #[arg(long, help = "Free-form notes")]
        notes: Option<String>,

        #[arg(long = "no-draft", help = "Do not recover values from a saved draft")]
        no_draft: bool,
    },

    /// Book an appointment
    Book {
        #[arg(long, help = "Client name (2-50 characters, letters and spaces)")]
        name: Option<String>,

        #[arg(long, help = "Client email address")]
        email: Option<String>,

        #[arg(long, help = "Contact number")]
        phone: Option<String>,

        #[arg(long, help = "Preferred date (YYYY-MM-DD, today or later)")]
        date: Option<String>,

        #[arg(long, help = "Preferred time of day")]
        time: Option<String>,

        #[arg(long, help = "Requested service, e.g. Fitting, Alteration")]
        service: Option<String>,

        #[arg(long, help = "Free-form notes")]
        notes: Option<String>,

        #[arg(long = "no-draft", help = "Do not recover values from a saved draft")]
        no_draft: bool,
    },

    /// List stored records
    List {
        #[arg(long, value_enum, help = "Limit to one record kind")]
        kind: Option<RecordKind>,
    },

    /// Search records by substring, case-insensitive
    Search {
        /// Text to look for in any field
        query: String,

        #[arg(long, value_enum, help = "Limit to one record kind")]
        kind: Option<RecordKind>,
    },

    /// Show record totals and recent activity
    Stats,

    /// Export a record collection to a file
    Export {
        #[arg(long, value_enum, help = "Record kind to export")]
        kind: RecordKind,

        #[arg(long, value_enum, help = "Output format")]
        format: ExportFormat,

        #[arg(long, help = "Output file (default: under the configured export dir)")]
        file: Option<String>,
    },

    /// Write a combined backup of both collections
    Backup {
        #[arg(long, help = "Output file (default: under the configured export dir)")]
        file: Option<String>,

        #[arg(long, help = "Compress the backup into a .zip archive")]
        compress: bool,

        #[arg(long, help = "Overwrite an existing backup without asking")]
        force: bool,
    },

    /// Remove expired autosave drafts
    Cleanup,
}
