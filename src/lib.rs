pub mod adapters;
pub mod commands;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliCommand, CliConfig};

pub use adapters::{HttpPetStore, TerminalNotifier};
pub use config::ConsoleSettings;
pub use core::console::PetConsole;
pub use utils::error::{PetConsoleError, Result};
