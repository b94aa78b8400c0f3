//! The only point of truth for everything related to the current user
//! session of the engine. A session owns the record collection it works
//! on, alongside the command history and the time the session started.
//!
//! A [`Session`] is single-threaded. The REPL drives it from one thread and
//! the collection inside it is never shared, so no locking happens here.
//!
//! At the end of a session the collection is discarded with it. Nothing is
//! written to disk.

use std::{fmt::Display, time::SystemTime};

use chrono::{DateTime, Local};

use crate::persistence::RecordCollection;

struct CommandHistory {
    command: String,
    command_time: SystemTime,
}

impl CommandHistory {
    pub fn command_time_string(&self) -> String {
        let datetime: DateTime<Local> = self.command_time.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl Display for CommandHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.command_time_string(), self.command)
    }
}

pub struct Session {
    command_history: Vec<CommandHistory>,
    start_time: SystemTime,
    collection: RecordCollection,
}

impl Session {
    pub fn client() -> Session {
        //! Returns a new client session over an empty collection.

        Session {
            command_history: vec![],
            start_time: SystemTime::now(),
            collection: RecordCollection::new(),
        }
    }

    pub fn collection(&self) -> &RecordCollection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut RecordCollection {
        &mut self.collection
    }

    pub fn add_to_command_history(&mut self, command: &str) {
        self.command_history.push(CommandHistory {
            command: command.to_string(),
            command_time: SystemTime::now(),
        });
    }

    pub fn start_time_string(&self) -> String {
        //! Convert the session start [`SystemTime`] into a readable string.

        let datetime: DateTime<Local> = self.start_time.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn command_history(&self, n_prev: Option<usize>) -> Vec<String> {
        //! The previously invoked commands, most recent first.
        //! Use `n_prev` to limit how many come back.

        let limit = n_prev.unwrap_or(self.command_history.len());

        self.command_history
            .iter()
            .rev()
            .take(limit)
            .map(|command| command.to_string())
            .collect()
    }

    pub fn show_command_history(&self, n_prev: Option<usize>) {
        for (index, command) in self.command_history(n_prev).iter().enumerate() {
            println!("{:3} | {}", index, command);
        }
    }

    pub fn get_last_command(&self, nth_back: usize) -> Option<&str> {
        //! Gets the `nth_back`th last command from the history, where `1`
        //! is the most recent one.

        if nth_back == 0 {
            return None;
        }

        self.command_history
            .iter()
            .nth_back(nth_back - 1)
            .map(|cmd| cmd.command.as_str())
    }
}
