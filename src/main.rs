use clap::Parser;
use pet_console::commands::{self, ShellLine, SHELL_HELP};
use pet_console::config::toml_config::TomlConfig;
use pet_console::core::ConfigProvider;
use pet_console::utils::{logger, validation::Validate};
use pet_console::{CliConfig, ConsoleSettings, HttpPetStore, PetConsole, TerminalNotifier};
use tokio::io::{AsyncBufReadExt, BufReader};

const EXIT_CONFIG: i32 = 1;
const EXIT_OPERATION_FAILED: i32 = 2;

type Console = PetConsole<HttpPetStore, TerminalNotifier>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let console = match build_console(&cli) {
        Ok(console) => console,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Both default lists are fetched on start, like a page load.
    let _ = console.load().await;

    match cli.command.into_console_command() {
        Some(command) => {
            let result = commands::execute(&console, command).await;
            println!("{}", console.view().await);
            if let Err(e) = result {
                tracing::debug!("Command failed ({:?}): {}", e.category(), e);
                std::process::exit(EXIT_OPERATION_FAILED);
            }
        }
        None => run_shell(&console).await?,
    }

    Ok(())
}

fn build_console(cli: &CliConfig) -> pet_console::Result<Console> {
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let settings = ConsoleSettings::resolve(file.as_ref(), &cli.overrides());
    settings.validate()?;
    tracing::info!("Using pet service at {}", settings.base_url());

    let store = HttpPetStore::new(&settings)?;
    Ok(PetConsole::with_default_status(
        store,
        TerminalNotifier,
        settings.default_status(),
    ))
}

async fn run_shell(console: &Console) -> anyhow::Result<()> {
    println!("{}", console.view().await);
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match ShellLine::parse(&line) {
            Ok(ShellLine::Empty) => continue,
            Ok(ShellLine::Quit) => break,
            Ok(ShellLine::Help) => println!("{}", SHELL_HELP),
            Ok(ShellLine::Show) => println!("{}", console.view().await),
            Ok(ShellLine::Command(command)) => {
                // Failures were already surfaced through the notifier.
                let _ = commands::execute(console, command).await;
                println!("{}", console.view().await);
            }
            Err(usage) => eprintln!("{}", usage),
        }
    }

    Ok(())
}
