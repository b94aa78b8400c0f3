use std::io::{self, Write};

use colored::Colorize;
use log::{debug, info};

use crate::{
    cli::{
        colors::QB_BLUE,
        commands::{CommandExecutor, CommandResult},
        config::BenchConfig,
        messages::{highlight_argument, system_message},
        parsers::{BenchArgs, parse_command},
    },
    sessions::session::Session,
};

pub mod bench;
mod colors;
mod commands;
pub mod config;
pub mod demo;
mod messages;
pub mod parsers;
mod splash_screen;

const DEFAULT_LAST_COMMAND_DELIMITER: &str = "!";

const QUICKBASE_COMMANDS_LIST: [(&str, &str); 10] = [
    ("add", "add <id> <value> <name> <description>; ids must be unique"),
    ("delete", "delete <id>; the last record moves into the freed position"),
    ("find", "find <id|value|name|description> <value>; prints positions"),
    ("get", "get <position>; positions change after add and delete"),
    ("size", "number of records in the collection"),
    ("dump", "print every record as JSON, in storage order"),
    ("!", "execute the last command, add more to go further back"),
    ("help", "list all available commands"),
    ("history", "list command history for this session"),
    ("quit", "end the session; the collection is discarded"),
];

pub fn run_client() {
    splash_screen::splash_screen();

    let mut session = Session::client();

    println!(
        "{}",
        system_message(
            "info",
            "An empty record collection was created for this session.".to_string()
        )
    );

    start_repl(&mut session);
}

pub fn run_demo() -> Result<(), String> {
    let mut n_failed = 0;

    for (name, outcome) in demo::run() {
        match outcome {
            Ok(summary) => println!("{}", system_message("demo", format!("{}: {}", highlight_argument(name), summary))),
            Err(failure) => {
                n_failed += 1;
                println!("{}", system_message("error", format!("{}: {}", highlight_argument(name), failure)))
            }
        }
    }

    if n_failed > 0 {
        Err(system_message("demo", format!("{} step(s) failed", n_failed)))
    } else {
        Ok(())
    }
}

pub fn run_bench(args: &BenchArgs) -> Result<(), String> {
    let config = BenchConfig::from_env()
        .and_then(|config| config.with_overrides(args))
        .map_err(|error| system_message("config", error))?;

    info!("running bench with {:?}", config);
    let report = bench::run(&config).map_err(|error| system_message("bench", error))?;

    for line in report.to_string().lines() {
        println!("{}", system_message("perf", line.to_string()));
    }

    Ok(())
}

pub fn show_help() {
    println!();
    println!("{:10} {}", "COMMAND".color(QB_BLUE), "DETAILS");
    for (command, details) in QUICKBASE_COMMANDS_LIST {
        println!("{:10} {}", command.color(QB_BLUE), details)
    }
}

fn start_repl(session: &mut Session) {
    println!(
        "{}",
        system_message(
            "system",
            format!(
                "Use '{}' to quit and '{}' to know all commands available.",
                highlight_argument("quit"),
                highlight_argument("help"),
            ),
        )
    );

    println!(
        "{}",
        system_message(
            "system",
            format!(
                "New session initiated at '{}'.",
                highlight_argument(&session.start_time_string())
            ),
        )
    );

    loop {
        let mut query_result: Option<CommandResult> = None;

        println!();
        print!("{:6} > ", "qb".color(QB_BLUE).bold());
        let _ = io::stdout().flush();

        let mut buffer = String::new();
        match io::stdin().read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                println!("{}", system_message("system", format!("Could not read input: {}", error)));
                break;
            }
        }

        if buffer.starts_with(DEFAULT_LAST_COMMAND_DELIMITER) {
            let last = buffer.matches(DEFAULT_LAST_COMMAND_DELIMITER).count();

            match session.get_last_command(last) {
                Some(last_command) => buffer = last_command.to_string(),
                None => {
                    println!(
                        "{}",
                        system_message(
                            "system",
                            format!(
                                "No command {} steps back.",
                                highlight_argument(&last.to_string())
                            ),
                        )
                    );
                    continue;
                }
            }
        }

        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }
        session.add_to_command_history(line);
        debug!("repl input: {}", line);

        match line {
            "history" => session.show_command_history(None),
            "help" => show_help(),
            "quit" | "exit" => break,
            command => match parse_command(command) {
                Ok(command) => match CommandExecutor::new(command, session).execute() {
                    Ok(result) => query_result = Some(result),
                    Err(error) => println!("{}", error),
                },
                Err(error) => println!("{}", error),
            },
        }

        if let Some(result) = query_result.take() {
            println!("{}", system_message("qb", result.to_string()));
        }
    }

    println!("Goodbye!")
}
