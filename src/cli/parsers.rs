//! The place where the command line and REPL command parsers are defined.
//!
//! The REPL grammar is small enough that a hand-written splitter does the
//! job. Every command is a keyword followed by whitespace separated
//! arguments, where the last argument may take the rest of the line.

use clap::{Args, Parser, Subcommand};

use crate::cli::messages::{highlight_argument, system_message};
use crate::persistence::{Column, Record};

#[derive(Parser)]
#[command(name = "quickbase")]
#[command(about = "An in-memory record collection with a primary key index", long_about = None)]
pub struct CliParser {
    #[command(subcommand)]
    pub mode: CliMode,
}

#[derive(Subcommand)]
pub enum CliMode {
    /// Start a REPL client over an empty collection.
    Client,

    /// Walk through the basic operations on a scripted collection.
    Demo,

    /// Time bulk insert, search and delete on a generated collection.
    Bench(BenchArgs),
}

/// Overrides for the `QUICKBASE_BENCH_*` settings.
#[derive(Args, Default)]
pub struct BenchArgs {
    /// Number of records to insert.
    #[arg(long)]
    pub records: Option<u32>,

    /// Number of ids to delete, starting from id 0.
    #[arg(long)]
    pub deletes: Option<u32>,

    /// Record values cycle through `0..modulus`.
    #[arg(long)]
    pub modulus: Option<u64>,

    /// The value searched for.
    #[arg(long)]
    pub probe: Option<u64>,
}

/// A single data command typed into the REPL.
///
/// Session keywords like `help` and `history` are matched by the REPL
/// loop itself and never reach this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Record),
    Delete(u32),
    Find { column: Column, value: String },
    Get(usize),
    Size,
    Dump,
}

fn _split_first(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (input, ""),
    }
}

fn _parser_error(message: String) -> String {
    system_message("parser", message)
}

fn _parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, String> {
    if raw.is_empty() {
        return Err(_parser_error(format!(
            "missing argument {}",
            highlight_argument(name)
        )));
    }

    raw.parse::<T>().map_err(|_| {
        _parser_error(format!(
            "invalid {} '{}': expected an unsigned number",
            name,
            highlight_argument(raw)
        ))
    })
}

fn _expect_no_arguments(keyword: &str, rest: &str) -> Result<(), String> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(_parser_error(format!(
            "{} takes no arguments",
            highlight_argument(keyword)
        )))
    }
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    //! Parse one REPL line into a [`Command`].
    //!
    //! - `add <id> <value> <name> <description...>`
    //! - `delete <id>`
    //! - `find <column> <value...>`
    //! - `get <position>`
    //! - `size`
    //! - `dump`
    //!
    //! The search value of `find` is passed through as text, so a malformed
    //! id or value is reported by the collection, not here.

    let (keyword, rest) = _split_first(line.trim());

    match keyword.to_lowercase().as_str() {
        "add" => {
            let (id, rest) = _split_first(rest);
            let (value, rest) = _split_first(rest);
            let (name, description) = _split_first(rest);

            let id = _parse_number::<u32>("id", id)?;
            let value = _parse_number::<u64>("value", value)?;
            if name.is_empty() || description.is_empty() {
                return Err(_parser_error(format!(
                    "usage: {}",
                    highlight_argument("add <id> <value> <name> <description>")
                )));
            }

            Ok(Command::Add(Record::new(id, value, name, description.trim_end())))
        }
        "delete" => {
            let (id, rest) = _split_first(rest);
            _expect_no_arguments("delete <id>", rest)?;
            Ok(Command::Delete(_parse_number::<u32>("id", id)?))
        }
        "find" => {
            let (column, value) = _split_first(rest);
            if column.is_empty() || value.is_empty() {
                return Err(_parser_error(format!(
                    "usage: {}",
                    highlight_argument("find <column> <value>")
                )));
            }

            let column = column
                .parse::<Column>()
                .map_err(|error| _parser_error(error.to_string()))?;

            Ok(Command::Find {
                column,
                value: value.trim_end().to_string(),
            })
        }
        "get" => {
            let (position, rest) = _split_first(rest);
            _expect_no_arguments("get <position>", rest)?;
            Ok(Command::Get(_parse_number::<usize>("position", position)?))
        }
        "size" => {
            _expect_no_arguments("size", rest)?;
            Ok(Command::Size)
        }
        "dump" => {
            _expect_no_arguments("dump", rest)?;
            Ok(Command::Dump)
        }
        "" => Err(_parser_error("empty command".to_string())),
        other => Err(_parser_error(format!(
            "unknown command '{}'; try {}",
            highlight_argument(other),
            highlight_argument("help")
        ))),
    }
}
