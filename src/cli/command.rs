use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "addrbook", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Location of the contacts file
    #[arg(long, env = "CONTACTS_PATH")]
    pub contacts_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        /// Contact home address
        #[arg(long)]
        address: Option<String>,
    },

    /// List every saved contact
    List,

    /// Search contacts by name
    Search {
        /// Case-insensitive part of a contact name
        #[arg(long)]
        keyword: String,
    },

    /// Replace the data of an existing contact
    /// Matches the first contact with the given name; use --id to pick
    /// one contact among duplicate names
    Edit {
        /// Current name of the contact to edit
        #[arg(long, conflicts_with = "id")]
        name: Option<String>,

        /// Id of the contact to edit
        #[arg(long)]
        id: Option<Uuid>,

        /// New name
        #[arg(long)]
        new_name: String,

        /// New phone number
        #[arg(long)]
        new_phone: String,

        /// New email address
        #[arg(long)]
        new_email: Option<String>,

        /// New home address
        #[arg(long)]
        new_address: Option<String>,
    },

    /// Delete contacts
    Delete {
        /// Name to delete; removes every contact with exactly this name
        #[arg(long, conflicts_with = "id")]
        name: Option<String>,

        /// Id of one contact to delete
        #[arg(long)]
        id: Option<Uuid>,
    },

    /// Import contacts from a .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
