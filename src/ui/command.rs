//! Command parsing for the TUI command deck
//!
//! Parses user input in Command mode, supporting:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `:n` / `:next`, `:b` / `:back`, `:c` / `:cancel` → wizard navigation
//! - `@filename` → Load report file (plain text, PDF or EPUB)
//! - `@@` → Load clipboard

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Next,
    Back,
    Cancel,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd.trim() {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "n" | "next" => Command::Next,
            "b" | "back" => Command::Back,
            "c" | "cancel" => Command::Cancel,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Next => AppEvent::Next,
        Command::Back => AppEvent::Back,
        Command::Cancel => AppEvent::Cancel,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
