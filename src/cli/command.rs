use crate::logging::DEFAULT_LOG_SPEC;
use crate::storage::DEFAULT_STORAGE_PATH;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Simple Phonebook")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "PHONEBOOK_STORAGE", default_value_t = String::from("json"))]
    pub storage: String,

    /// File backing json storage
    #[arg(long, env = "PHONEBOOK_STORAGE_PATH", default_value_t = String::from(DEFAULT_STORAGE_PATH))]
    pub storage_path: String,

    /// Log filter, e.g. info or phonebook=debug
    #[arg(long, env = "PHONEBOOK_LOG", default_value_t = String::from(DEFAULT_LOG_SPEC))]
    pub log: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        number: String,
    },
    /// List contacts
    List {
        /// Show only contacts whose name contains this text (any case)
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Delete a contact by id,
    /// or by name when no id is given
    Delete {
        /// Id of contact to delete
        #[arg(long)]
        id: Option<String>,

        /// Name of contact to delete
        #[arg(long)]
        name: Option<String>,
    },
}
