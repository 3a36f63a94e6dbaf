use crate::commands::{ConsoleCommand, ListTarget};
use crate::config::SettingsOverrides;
use crate::core::{AdoptInput, EditFields, LookupInput, NewPetInput};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pet-console")]
#[command(about = "Administrative console for a pet-inventory REST service")]
pub struct CliConfig {
    /// Base URL of the pet service, e.g. https://petstore.swagger.io/v2
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Refresh one of the two lists
    List {
        #[arg(value_enum)]
        target: ListTarget,
    },
    /// Show one pet in the detail view
    Get { id: String },
    /// Add a pet under a random id
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        status: String,
    },
    /// Replace a pet with the given fields
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        status: String,
    },
    Delete { id: String },
    /// Mark a pet as sold
    Adopt { id: String },
    /// Read commands from stdin, one per line
    Shell,
}

impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout_secs,
        }
    }
}

impl CliCommand {
    /// `None` for `shell`, which is driven line by line.
    pub fn into_console_command(self) -> Option<ConsoleCommand> {
        let command = match self {
            CliCommand::List { target } => ConsoleCommand::List(target),
            CliCommand::Get { id } => ConsoleCommand::Get(LookupInput { id }),
            CliCommand::Create { name, status } => {
                ConsoleCommand::Create(NewPetInput { name, status })
            }
            CliCommand::Update { id, name, status } => {
                ConsoleCommand::Update(EditFields { id, name, status })
            }
            CliCommand::Delete { id } => ConsoleCommand::Delete(LookupInput { id }),
            CliCommand::Adopt { id } => ConsoleCommand::Adopt(AdoptInput { id }),
            CliCommand::Shell => return None,
        };
        Some(command)
    }
}
