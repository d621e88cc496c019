use clap::{Args, Parser, Subcommand};
use phonebook::model::Field;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(about = "A small, file-backed contact directory", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding phonebook.csv and settings.json
    #[arg(long, env = "PHONEBOOK_HOME", global = true)]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records page by page
    #[command(alias = "ls")]
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Add a new record
    #[command(alias = "n")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit a record; fields not given keep their current value
    #[command(alias = "e")]
    Edit {
        /// ID of the record
        id: usize,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Show one or more records
    #[command(alias = "v")]
    View {
        /// IDs of the records
        #[arg(required = true, num_args = 1..)]
        ids: Vec<usize>,
    },

    /// Search records; all given criteria must match
    #[command(alias = "s")]
    Search {
        /// Match by ID
        #[arg(long)]
        id: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,

        /// Require exact values instead of substrings
        #[arg(long, conflicts_with = "loose")]
        strict: bool,

        /// Match substrings
        #[arg(long)]
        loose: bool,

        /// Compare case-sensitively
        #[arg(long, conflicts_with = "ignore_case")]
        case_sensitive: bool,

        /// Compare ignoring case
        #[arg(long)]
        ignore_case: bool,
    },

    /// Print the field names in file order
    Fields,

    /// Get or set configuration
    Config {
        /// Config key (e.g., records_per_page)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub middle_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub organization: Option<String>,

    #[arg(long)]
    pub work_phone: Option<String>,

    #[arg(long)]
    pub personal_phone: Option<String>,
}

impl FieldArgs {
    /// The fields that were given on the command line, in canonical order.
    pub fn given(self) -> Vec<(Field, String)> {
        [
            (Field::FirstName, self.first_name),
            (Field::MiddleName, self.middle_name),
            (Field::LastName, self.last_name),
            (Field::Organization, self.organization),
            (Field::WorkPhone, self.work_phone),
            (Field::PersonalPhone, self.personal_phone),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

/// `Some(true)` / `Some(false)` when one of a pair of opposing flags was given.
pub fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
