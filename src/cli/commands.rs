//! This module is where the REPL data commands are executed.
//!
//! Quickbase command line syntax:
//!
//! - quickbase --help | Command Line Help
//! - quickbase client | Run the REPL.
//! - quickbase demo   | Walk through the scripted scenarios.
//! - quickbase bench  | Run the performance harness.
//!
//! Once the user is inside the REPL, the following commands are
//! available on the session's collection.
//!
//! - add <id> <value> <name> <description>
//! - delete <id>
//! - find <column> <value>
//! - get <position>
//! - size
//! - dump

use std::fmt::Display;

use log::debug;

use crate::cli::messages::{highlight_argument, system_message};
use crate::cli::parsers::Command;
use crate::persistence::Record;
use crate::sessions::session::Session;

/// The executor that runs a single [`Command`] against a [`Session`].
///
/// The executor borrows the session mutably for its whole lifetime, so no
/// other reader can observe the collection while a command runs.
pub struct CommandExecutor<'a> {
    command: Command,
    session: &'a mut Session,
}

/// What a command produced, ready to be shown on the terminal.
///
/// `rows` pairs each record with the position it was found at. Those
/// positions are only valid until the next `add` or `delete`.
pub struct CommandResult {
    pub message: String,
    pub rows: Vec<(usize, Record)>,
    pub json: Option<String>,
}

impl CommandResult {
    fn message(message: String) -> CommandResult {
        CommandResult {
            message,
            rows: vec![],
            json: None,
        }
    }
}

impl Display for CommandResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;

        if !self.rows.is_empty() {
            write!(f, "\n{:>8} | id | value | name | description", "position")?;
            for (position, record) in self.rows.iter() {
                write!(f, "\n{:>8} | {}", position, record)?;
            }
        }

        if let Some(json) = self.json.as_ref() {
            write!(f, "\n{}", json)?;
        }

        Ok(())
    }
}

impl<'a> CommandExecutor<'a> {
    pub fn new(command: Command, session: &'a mut Session) -> CommandExecutor<'a> {
        CommandExecutor { command, session }
    }

    pub fn execute(self) -> Result<CommandResult, String> {
        //! Run the command and describe the outcome.
        //!
        //! Negative outcomes such as a duplicate id or a missing record are
        //! successful executions with an explanatory message. Only contract
        //! violations reported by the collection come back as `Err`.

        debug!("executing {:?}", self.command);

        let collection = self.session.collection_mut();

        match self.command {
            Command::Add(record) => {
                let id = record.id;
                let message = if collection.add(record) {
                    format!("added record {}", highlight_argument(&id.to_string()))
                } else {
                    format!(
                        "record {} already exists; nothing was added",
                        highlight_argument(&id.to_string())
                    )
                };
                Ok(CommandResult::message(message))
            }
            Command::Delete(id) => {
                let message = if collection.delete_by_id(id) {
                    format!("deleted record {}", highlight_argument(&id.to_string()))
                } else {
                    format!(
                        "record {} does not exist; nothing was deleted",
                        highlight_argument(&id.to_string())
                    )
                };
                Ok(CommandResult::message(message))
            }
            Command::Find { column, value } => {
                let positions = collection
                    .find_by_column(column, &value)
                    .map_err(|error| system_message("error", error.to_string()))?;

                let mut rows = Vec::with_capacity(positions.len());
                for position in positions {
                    let record = collection
                        .get_record(position)
                        .map_err(|error| system_message("error", error.to_string()))?;
                    rows.push((position, record.clone()));
                }

                Ok(CommandResult {
                    message: format!(
                        "{} record(s) where {} = '{}'",
                        rows.len(),
                        highlight_argument(&column.to_string()),
                        value
                    ),
                    rows,
                    json: None,
                })
            }
            Command::Get(position) => {
                let record = collection
                    .get_record(position)
                    .map_err(|error| system_message("error", error.to_string()))?;

                Ok(CommandResult {
                    message: format!("record at position {}", highlight_argument(&position.to_string())),
                    rows: vec![(position, record.clone())],
                    json: None,
                })
            }
            Command::Size => Ok(CommandResult::message(format!(
                "{} record(s) in the collection",
                highlight_argument(&collection.size().to_string())
            ))),
            Command::Dump => {
                let json = serde_json::to_string_pretty(collection.records())
                    .map_err(|error| system_message("error", error.to_string()))?;

                Ok(CommandResult {
                    message: format!(
                        "{} record(s) in storage order",
                        highlight_argument(&collection.size().to_string())
                    ),
                    rows: vec![],
                    json: Some(json),
                })
            }
        }
    }
}
