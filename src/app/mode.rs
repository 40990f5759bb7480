/// Report wizard steps plus the command deck overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Edit,
    Command,
    Entities,
    Done,
    Quit,
}

impl AppMode {
    pub fn label(&self) -> &'static str {
        match self {
            AppMode::Edit => "EDIT",
            AppMode::Command => "COMMAND",
            AppMode::Entities => "ENTITIES",
            AppMode::Done => "DONE",
            AppMode::Quit => "QUIT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(AppMode::Edit.label(), "EDIT");
        assert_eq!(AppMode::Entities.label(), "ENTITIES");
        assert_ne!(AppMode::Done, AppMode::Quit);
    }
}
