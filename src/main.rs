//! Assistant bot - main entry point.
//!
//! A line-oriented command interpreter over the address book library. All
//! logic lives in `address_book::commands`; this binary only tokenizes input
//! and maps command names to handlers.

use address_book::error::CommandResult;
use address_book::{commands, AddressBook, Config};
use anyhow::Result;
use chrono::Local;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Split a line into the lowercased command word and its raw arguments.
fn parse_input(line: &str) -> (String, Vec<&str>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("").to_lowercase();
    (command, parts.collect())
}

/// Print a handler's outcome; failures render as their display text.
fn respond(result: CommandResult) {
    match result {
        Ok(message) => println!("{message}"),
        Err(err) => println!("{err}"),
    }
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Log to stderr only, so stdout stays clean for the conversation.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("assistant bot starting");

    let mut book = AddressBook::new();
    let stdin = io::stdin();

    println!("Welcome to the assistant bot!");
    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like "exit".
            println!("Good bye!");
            break;
        }

        let (command, args) = parse_input(&line);
        debug!(%command, args = args.len(), "dispatching");

        match command.as_str() {
            "close" | "exit" => {
                println!("Good bye!");
                break;
            }
            "hello" => println!("How can I help you?"),
            "add" => respond(commands::add_contact(&args, &mut book)),
            "change" => respond(commands::change_contact(&args, &mut book)),
            "phone" => respond(commands::show_phone(&args, &book)),
            "all" => respond(commands::show_all(&book)),
            "add-birthday" => respond(commands::add_birthday(&args, &mut book)),
            "show-birthday" => respond(commands::show_birthday(&args, &book)),
            "birthdays" => respond(commands::birthdays(&book, Local::now().date_naive())),
            _ => println!("Invalid command."),
        }
    }

    info!("assistant bot shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_lowercases_command() {
        let (command, args) = parse_input("ADD Alice 1234567890\n");
        assert_eq!(command, "add");
        assert_eq!(args, ["Alice", "1234567890"]);
    }

    #[test]
    fn test_parse_input_empty_line() {
        let (command, args) = parse_input("   \n");
        assert_eq!(command, "");
        assert!(args.is_empty());
    }

    #[test]
    fn test_parse_input_keeps_argument_case() {
        let (command, args) = parse_input("show-birthday Alice");
        assert_eq!(command, "show-birthday");
        assert_eq!(args, ["Alice"]);
    }
}
