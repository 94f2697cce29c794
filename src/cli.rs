use crate::domain::{Choice, ContactId};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version, about = "Contact manager backed by a local JSON file")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Contacts file (default: contacts_file from config, else ./contacts.json)"
    )]
    pub file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every contact
    List,
    /// Case-insensitive substring match on name or phone
    Search { term: Option<String> },
    /// Show all fields of one contact
    Show { id: ContactId },
    /// Add a contact (name and phone are required)
    Add {
        #[command(flatten)]
        fields: NewContactArgs,
    },
    /// Edit a contact; fields not given keep their current value
    Update {
        id: ContactId,
        #[command(flatten)]
        fields: EditContactArgs,
    },
    /// Delete a contact after confirmation
    Delete {
        id: ContactId,
        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
    /// Interactive session: filter, select, add, edit, delete
    Session,
}

#[derive(Args, Debug, Clone)]
pub struct NewContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub address: String,
}

#[derive(Args, Debug, Clone)]
pub struct EditContactArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Parser, Debug)]
#[command(name = "rps", version, about = "Rock, paper, scissors against the computer")]
pub struct RpsCli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Seed the computer's choices (reproducible games)")]
    pub seed: Option<u64>,
    #[command(subcommand)]
    pub command: GameCommands,
}

#[derive(Subcommand, Debug)]
pub enum GameCommands {
    /// Play a single round
    Play {
        #[arg(value_enum)]
        choice: Choice,
    },
    /// Play rounds interactively, keeping score until quit
    Session,
}
