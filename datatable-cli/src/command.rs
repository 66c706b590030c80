//! Interactive commands typed at the prompt.

use datatable_lib::engine::Action;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  next | n              next page
  prev | p              previous page
  page <n>              jump to page n
  sort <key>            sort by column key (again to flip)
  search <text>         filter rows; `search` alone clears
  clear                 clear the search
  select <id>           check a row
  unselect <id>         uncheck a row
  deselect-all          uncheck every row
  export                print the selection as JSON
  reload                fetch the data again
  help                  show this help
  quit | q              exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Anything that maps straight onto the engine.
    Table(Action),
    Export,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("'{0}' is not a page number")]
    InvalidPage(String),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "next" | "n" => Command::Table(Action::NextPage),
        "prev" | "previous" | "p" => Command::Table(Action::PreviousPage),
        "page" => {
            let page = required(rest, "page", "a page number")?;
            let page = page
                .parse()
                .map_err(|_| CommandError::InvalidPage(page.to_string()))?;
            Command::Table(Action::GoToPage(page))
        }
        "sort" => Command::Table(Action::ClickHeader(
            required(rest, "sort", "a column key")?.to_string(),
        )),
        "search" | "/" => Command::Table(Action::Search(rest.to_string())),
        "clear" => Command::Table(Action::Search(String::new())),
        "select" => Command::Table(Action::Toggle {
            id: required(rest, "select", "a record id")?.to_string(),
            checked: true,
        }),
        "unselect" => Command::Table(Action::Toggle {
            id: required(rest, "unselect", "a record id")?.to_string(),
            checked: false,
        }),
        "deselect-all" => Command::Table(Action::ClearSelection),
        "export" => Command::Export,
        "reload" => Command::Reload,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}
