//! Terminal input: one command per line.
//!
//! A background thread reads stdin and forwards each line to the UI loop as a
//! `UiEvent`, so the loop can `select!` between keystrokes and fetch outcomes.
use std::io::{self, BufRead};
use std::str::FromStr;
use std::thread;

use crossbeam_channel::Sender;
use log::{debug, error};
use quote_common::QuoteError;

use crate::navigation::Tab;
use crate::screen::diary::Rating;
use crate::screen::profile::ProfileField;

/// Usage shown by `help` and after an unknown command.
pub const HELP: &str = "commands: next | home | diary | profile | today <text> | happiness <0-10> | \
productivity <0-10> | name|dob|mood|job <text> | pick <file> | help | quit";

/// Events delivered to the UI loop besides fetch outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// One line typed by the user.
    Input(String),
    /// Stdin reached end of file.
    InputClosed,
    /// Ctrl+C.
    Shutdown,
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// "Show Me Another Quote!"
    NextQuote,
    Navigate(Tab),
    Today(String),
    Happiness(Rating),
    Productivity(Rating),
    SetProfile(ProfileField, String),
    Pick(String),
    Help,
    Quit,
}

impl FromStr for UserCommand {
    type Err = QuoteError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(UserCommand::NextQuote);
        }
        if let Ok(tab) = line.parse::<Tab>() {
            return Ok(UserCommand::Navigate(tab));
        }

        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let command = match verb.to_ascii_lowercase().as_str() {
            "n" | "next" => UserCommand::NextQuote,
            "q" | "quit" | "exit" => UserCommand::Quit,
            "h" | "help" | "?" => UserCommand::Help,
            "tab" => UserCommand::Navigate(
                rest.parse()
                    .map_err(|_| QuoteError::Format(format!("Unknown tab: '{}'", rest)))?,
            ),
            "today" => UserCommand::Today(rest.to_string()),
            "happiness" => UserCommand::Happiness(rest.parse()?),
            "productivity" => UserCommand::Productivity(rest.parse()?),
            "pick" => UserCommand::Pick(rest.to_string()),
            _ => match verb.parse::<ProfileField>() {
                Ok(field) => UserCommand::SetProfile(field, rest.to_string()),
                Err(_) => return Err(QuoteError::Format(format!("Unknown command: '{}'", line))),
            },
        };
        Ok(command)
    }
}

/// Spawns the stdin reader. Sends `InputClosed` once stdin ends or fails.
pub fn spawn_input_reader(tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(UiEvent::Input(line)).is_err() {
                        debug!("UI loop is gone, input reader stopping");
                        return;
                    }
                }
                Err(e) => {
                    error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
        let _ = tx.send(UiEvent::InputClosed);
    });
}
