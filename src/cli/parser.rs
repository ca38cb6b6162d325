use crate::models::RecordKind;
use crate::store::Source;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rInternLog
/// CLI application to record internship attendance and field diaries
#[derive(Parser)]
#[command(
    name = "rinternlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Internship attendance and field diary log: CSV mirror + remote table, PDF reports",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the local CSV mirrors
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the local mirrors
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Record an attendance line (Controle de Frequência)
    Attend {
        /// Intern name
        #[arg(long)]
        name: String,

        /// Date (YYYY-MM-DD or DD/MM/YYYY), default today
        #[arg(long)]
        date: Option<String>,

        /// Clock-in time (HH:MM), default 07:00
        #[arg(long = "in")]
        time_in: Option<String>,

        /// Clock-out time (HH:MM), default 13:00
        #[arg(long = "out")]
        time_out: Option<String>,

        /// Hours worked; derived from --in/--out when omitted
        #[arg(long)]
        hours: Option<f64>,

        /// Intern signature
        #[arg(long = "intern-sign", default_value = "")]
        intern_signature: String,

        /// Supervisor signature
        #[arg(long = "supervisor-sign", default_value = "")]
        supervisor_signature: String,
    },

    /// Record a field diary entry (Diário de Campo)
    Diary {
        /// Intern name
        #[arg(long)]
        name: String,

        /// Date (YYYY-MM-DD or DD/MM/YYYY), default today
        #[arg(long)]
        date: Option<String>,

        /// Activity carried out
        #[arg(long)]
        activity: String,

        /// Supervisor signature
        #[arg(long = "supervisor-sign", default_value = "")]
        supervisor_signature: String,
    },

    /// List stored records
    List {
        #[arg(long, value_enum, default_value = "attendance")]
        kind: RecordKind,

        #[arg(long, help = "Show only this intern's records")]
        name: Option<String>,

        #[arg(long, help = "List intern names instead of records")]
        names: bool,

        #[arg(long, value_enum, default_value = "auto")]
        source: Source,
    },

    /// Generate the PDF report of one intern
    Report {
        #[arg(long, value_enum, default_value = "attendance")]
        kind: RecordKind,

        /// Intern name (exact match)
        #[arg(long)]
        name: String,

        #[arg(
            long,
            help = "Internship period label, e.g. '13/08/25 a 15/09/25' (attendance only)"
        )]
        period: Option<String>,

        #[arg(long = "out-dir", value_name = "DIR")]
        out_dir: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,

        #[arg(long, value_enum, default_value = "auto")]
        source: Source,
    },

    /// Hours per intern and diaries per supervisor
    Stats {
        #[arg(long, value_enum, default_value = "auto")]
        source: Source,
    },
}
