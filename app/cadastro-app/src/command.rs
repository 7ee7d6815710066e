//! Line commands accepted by the terminal form.

use crate::error::{AppError, Result as AppErrorResult};

use std::panic::Location;
use std::str::FromStr;

use cadastro_core::{FieldKind, FormAction, RecordId};
use error_location::ErrorLocation;

pub const HELP: &str = "\
Commands:
  name <text>      set the name
  phone <text>     set the phone, formatted while typing
  email <text>     set the email
  cpf <text>       set the CPF, formatted while typing
  submit           create the user, or update the one being edited
  edit <id>        load a user into the form
  delete <id>      ask to delete a user
  confirm          confirm the pending delete
  cancel           dismiss the pending delete
  list             redraw the screen
  help             show this text
  quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { kind: FieldKind, text: String },
    Submit,
    Edit(RecordId),
    Delete(RecordId),
    Confirm,
    Cancel,
    List,
    Help,
    Quit,
}

impl Command {
    /// The form action this command triggers, if it touches the form at all.
    pub fn into_action(self) -> Option<FormAction> {
        match self {
            Self::Set { kind, text } => Some(FormAction::SetField { kind, text }),
            Self::Submit => Some(FormAction::Submit),
            Self::Edit(id) => Some(FormAction::BeginEdit(id)),
            Self::Delete(id) => Some(FormAction::RequestDelete(id)),
            Self::Confirm => Some(FormAction::ConfirmDelete),
            Self::Cancel => Some(FormAction::CancelDelete),
            Self::List | Self::Help | Self::Quit => None,
        }
    }

    #[track_caller]
    fn invalid(message: impl Into<String>) -> AppError {
        AppError::Command {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    fn no_argument(verb: &str, rest: &str, command: Self) -> AppErrorResult<Self> {
        if rest.trim().is_empty() {
            Ok(command)
        } else {
            Err(Self::invalid(format!("'{}' takes no argument", verb)))
        }
    }
}

impl FromStr for Command {
    type Err = AppError;

    /// Field text is everything after the whitespace following the verb,
    /// kept verbatim so names may contain spaces. `name` alone clears the field.
    #[track_caller]
    fn from_str(line: &str) -> AppErrorResult<Self> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (line, ""),
        };
        let verb = verb.to_lowercase();

        if let Ok(kind) = FieldKind::from_str(&verb) {
            return Ok(Self::Set {
                kind,
                text: rest.to_string(),
            });
        }

        match verb.as_str() {
            "" => Err(Self::invalid("empty command")),
            "submit" | "cadastrar" | "atualizar" => Self::no_argument(&verb, rest, Self::Submit),
            "edit" | "editar" => Ok(Self::Edit(parse_id(&verb, rest)?)),
            "delete" | "excluir" => Ok(Self::Delete(parse_id(&verb, rest)?)),
            "confirm" | "confirmar" => Self::no_argument(&verb, rest, Self::Confirm),
            "cancel" | "cancelar" => Self::no_argument(&verb, rest, Self::Cancel),
            "list" | "ls" => Self::no_argument(&verb, rest, Self::List),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(Self::invalid(format!("unknown command '{}'", other))),
        }
    }
}

#[track_caller]
fn parse_id(verb: &str, rest: &str) -> AppErrorResult<RecordId> {
    if rest.trim().is_empty() {
        return Err(Command::invalid(format!("'{}' needs a user id", verb)));
    }
    RecordId::from_str(rest)
        .map_err(|_| Command::invalid(format!("'{}' is not a user id", rest.trim())))
}
