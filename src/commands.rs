use crate::core::console::PetConsole;
use crate::core::{AdoptInput, EditFields, LookupInput, NewPetInput, Notifier, PetStore};
use crate::utils::error::Result;

/// The two lists the console keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ListTarget {
    Available,
    Sold,
}

/// One user action against the console, as typed on the command line or in
/// the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    List(ListTarget),
    Get(LookupInput),
    Create(NewPetInput),
    /// Opens the edit form on a pet currently shown in a container.
    Edit(String),
    /// Types the fields into the edit form and submits it.
    Update(EditFields),
    /// Submits the edit form as it stands.
    Save,
    Cancel,
    Delete(LookupInput),
    Adopt(AdoptInput),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellLine {
    Command(ConsoleCommand),
    Show,
    Help,
    Quit,
    Empty,
}

pub const SHELL_HELP: &str = "\
Commands:
  list available|sold          refresh a list
  get <id>                     show one pet in the detail view
  create <name> [status]       add a pet with a random id
  edit <id>                    open the edit form on a listed pet
  update <id> <name> <status>  fill the edit form and submit it
  save                         submit the edit form
  cancel                       close the edit form
  delete <id>                  delete a pet
  adopt <id>                   mark a pet as sold
  show                         print every container
  help                         print this help
  quit                         leave the shell";

impl ShellLine {
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = words.split_first() else {
            return Ok(ShellLine::Empty);
        };

        let id_arg = |args: &[&str]| -> std::result::Result<String, String> {
            match args {
                [id] => Ok(id.to_string()),
                _ => Err(format!("usage: {} <id>", verb)),
            }
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "show" => return Ok(ShellLine::Show),
            "help" | "?" => return Ok(ShellLine::Help),
            "quit" | "exit" => return Ok(ShellLine::Quit),
            "list" => match args {
                ["available"] => ConsoleCommand::List(ListTarget::Available),
                ["sold"] | ["adopted"] => ConsoleCommand::List(ListTarget::Sold),
                _ => return Err("usage: list available|sold".to_string()),
            },
            "get" => ConsoleCommand::Get(LookupInput { id: id_arg(args)? }),
            "create" => match args {
                [name] => ConsoleCommand::Create(NewPetInput {
                    name: name.to_string(),
                    status: String::new(),
                }),
                [name, status] => ConsoleCommand::Create(NewPetInput {
                    name: name.to_string(),
                    status: status.to_string(),
                }),
                _ => return Err("usage: create <name> [status]".to_string()),
            },
            "edit" => ConsoleCommand::Edit(id_arg(args)?),
            "update" => match args {
                [id, name, status] => ConsoleCommand::Update(EditFields {
                    id: id.to_string(),
                    name: name.to_string(),
                    status: status.to_string(),
                }),
                _ => return Err("usage: update <id> <name> <status>".to_string()),
            },
            "save" => ConsoleCommand::Save,
            "cancel" => ConsoleCommand::Cancel,
            "delete" => ConsoleCommand::Delete(LookupInput { id: id_arg(args)? }),
            "adopt" => ConsoleCommand::Adopt(AdoptInput { id: id_arg(args)? }),
            other => return Err(format!("unknown command '{}', try 'help'", other)),
        };

        Ok(ShellLine::Command(command))
    }
}

/// Runs `command` against `console`. Failures have already been notified
/// when this returns `Err`.
pub async fn execute<S: PetStore, N: Notifier>(
    console: &PetConsole<S, N>,
    command: ConsoleCommand,
) -> Result<()> {
    tracing::debug!("Executing {:?}", command);

    match command {
        ConsoleCommand::List(ListTarget::Available) => console.list_available().await,
        ConsoleCommand::List(ListTarget::Sold) => console.list_recently_adopted().await,
        ConsoleCommand::Get(input) => console.get_by_id(&input).await.map(|_| ()),
        ConsoleCommand::Create(input) => console.create(&input).await.map(|_| ()),
        ConsoleCommand::Edit(raw_id) => console
            .begin_edit_listed(&LookupInput { id: raw_id })
            .await
            .map(|_| ()),
        ConsoleCommand::Update(fields) => {
            console.fill_edit_form(fields).await;
            console.update().await.map(|_| ())
        }
        ConsoleCommand::Save => console.update().await.map(|_| ()),
        ConsoleCommand::Cancel => {
            console.cancel_edit().await;
            Ok(())
        }
        ConsoleCommand::Delete(input) => console.delete_typed(&input).await,
        ConsoleCommand::Adopt(input) => console.adopt(&input).await,
    }
}
