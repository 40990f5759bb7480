/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    Next,
    Back,
    Cancel,
    Quit,
    Help,
    /// Pointer pressed on the token with this index
    Press(usize),
    /// Pointer dragged into the token with this index
    DragEnter(usize),
    Release,
    /// Scroll the token view by this many rows
    Scroll(i16),
    Annotate,
    Warning(String),
    InvalidCommand(String),
    None,
}
