pub mod command;
pub mod layout;
pub mod pointer;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use command::{command_to_app_event, parse_command, Command};
pub use layout::{layout_tokens, TokenCell, TokenLayout};
pub use pointer::PointerTracker;
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
pub use theme::Theme;
