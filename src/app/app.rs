use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use super::status::StatusMessage;
use crate::engine::config::Config;
use crate::input::{self, LoadError, LoadedReport};
use crate::report::ReportSession;
use crate::ui::command::{command_to_app_event, parse_command};
use crossterm::event::KeyCode;

const HELP_TEXT: &str =
    ":n next  :b back  :c cancel  :q quit  @file load  @@ clipboard  | Enter annotates selection";

/// Report wizard core: edit the text, select entities, finish.
pub struct App {
    mode: AppMode,
    /// Wizard step to return to when the command deck closes
    step: AppMode,
    config: Config,
    draft: String,
    source: Option<String>,
    session: Option<ReportSession>,
    status: Option<StatusMessage>,
    command_buffer: String,
    scroll: usize,
    /// Last row the token view can scroll to, reported by the renderer.
    scroll_limit: usize,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let draft = config.wizard.default_report.clone();
        Self {
            mode: AppMode::Edit,
            step: AppMode::Edit,
            config,
            draft,
            source: None,
            session: None,
            status: None,
            command_buffer: String::new(),
            scroll: 0,
            scroll_limit: usize::MAX,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn session(&self) -> Option<&ReportSession> {
        self.session.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn command_buffer(&self) -> &str {
        &self.command_buffer
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Caps scrolling at `limit`, the largest offset the last frame could show.
    pub fn set_scroll_limit(&mut self, limit: usize) {
        self.scroll_limit = limit;
        self.scroll = self.scroll.min(limit);
    }

    /// Replaces the draft with a loaded report and goes back to editing.
    pub fn set_report(&mut self, report: LoadedReport) {
        self.status = Some(StatusMessage::info(format!("Loaded {}", report.source)));
        self.draft = report.text;
        self.source = Some(report.source);
        self.session = None;
        self.scroll = 0;
        self.set_step(AppMode::Edit);
    }

    fn set_step(&mut self, step: AppMode) {
        if self.step != step {
            tracing::debug!(from = ?self.step, to = ?step, "wizard step changed");
        }
        self.step = step;
        self.mode = step;
    }

    fn warn(&mut self, text: impl Into<String>) {
        let message = StatusMessage::warning(text);
        tracing::warn!("{}", message.text);
        self.status = Some(message);
    }

    fn apply_load(&mut self, result: Result<LoadedReport, LoadError>) {
        match result {
            Ok(report) => self.set_report(report),
            Err(err) => self.warn(err.to_string()),
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadFile(path) => self.apply_load(input::load_report(&path)),
            AppEvent::LoadClipboard => self.apply_load(input::clipboard::load()),
            AppEvent::Next => self.next_step(),
            AppEvent::Back => self.previous_step(),
            AppEvent::Cancel | AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.status = Some(StatusMessage::info(HELP_TEXT)),
            AppEvent::Press(index) => self.with_session(|session| session.press(index)),
            AppEvent::DragEnter(index) => self.with_session(|session| session.drag_enter(index)),
            AppEvent::Release => {
                if let Some(session) = self.session.as_mut() {
                    session.release();
                }
            }
            AppEvent::Scroll(delta) => {
                if self.mode == AppMode::Entities {
                    self.scroll = self
                        .scroll
                        .saturating_add_signed(isize::from(delta))
                        .min(self.scroll_limit);
                }
            }
            AppEvent::Annotate => self.annotate(),
            AppEvent::Warning(message) => self.warn(message),
            AppEvent::InvalidCommand(input) => self.warn(format!("Unknown command: {}", input)),
            AppEvent::None => {}
        }
    }

    fn with_session<F>(&mut self, action: F)
    where
        F: FnOnce(&mut ReportSession) -> Result<(), crate::report::SelectionError>,
    {
        if self.mode != AppMode::Entities {
            return;
        }
        let result = match self.session.as_mut() {
            Some(session) => action(session),
            None => return,
        };
        if let Err(err) = result {
            self.warn(err.to_string());
        }
    }

    fn next_step(&mut self) {
        match self.step {
            AppMode::Edit => {
                let session = ReportSession::new(&self.draft, self.config.selection.clone());
                tracing::debug!(tokens = session.tokens().len(), "report tokenized");
                self.session = Some(session);
                self.scroll = 0;
                self.scroll_limit = usize::MAX;
                self.status = None;
                self.set_step(AppMode::Entities);
            }
            AppMode::Entities => {
                let count = self.session.as_ref().map_or(0, |s| s.entities().len());
                self.status = Some(StatusMessage::info(format!(
                    "Report created successfully ({} entities). Press any key to exit.",
                    count
                )));
                self.set_step(AppMode::Done);
            }
            _ => {}
        }
    }

    fn previous_step(&mut self) {
        match self.step {
            AppMode::Entities => {
                self.session = None;
                self.status = None;
                self.set_step(AppMode::Edit);
            }
            AppMode::Edit => self.warn("Already at the first step"),
            _ => {}
        }
    }

    fn annotate(&mut self) {
        if self.mode != AppMode::Entities {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.annotate() {
            Some(entity) => {
                let text = format!("Entity: \"{}\"", entity.text.trim());
                self.status = Some(StatusMessage::info(text));
            }
            None => self.warn("Nothing selected"),
        }
    }

    /// Keyboard input for the current mode.
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.mode {
            AppMode::Edit => match key {
                KeyCode::Char(c) => self.draft.push(c),
                KeyCode::Enter => self.draft.push('\n'),
                KeyCode::Tab => self.draft.push('\t'),
                KeyCode::Backspace => {
                    self.draft.pop();
                }
                KeyCode::Esc => self.open_command_deck(),
                _ => {}
            },
            AppMode::Entities => match key {
                KeyCode::Enter => self.handle_event(AppEvent::Annotate),
                KeyCode::Esc | KeyCode::Char(':') => self.open_command_deck(),
                KeyCode::Down => self.handle_event(AppEvent::Scroll(1)),
                KeyCode::Up => self.handle_event(AppEvent::Scroll(-1)),
                _ => {}
            },
            AppMode::Command => match key {
                KeyCode::Char(c) => self.command_buffer.push(c),
                KeyCode::Backspace => {
                    self.command_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = std::mem::take(&mut self.command_buffer);
                    self.mode = self.step;
                    self.handle_event(command_to_app_event(parse_command(&input)));
                }
                KeyCode::Esc => {
                    self.command_buffer.clear();
                    self.mode = self.step;
                }
                _ => {}
            },
            AppMode::Done => self.mode = AppMode::Quit,
            AppMode::Quit => {}
        }
    }

    fn open_command_deck(&mut self) {
        self.command_buffer.clear();
        self.mode = AppMode::Command;
    }

    pub fn get_render_state(&self) -> RenderState {
        let mut state = match &self.session {
            Some(session) => RenderState::from_session(self.mode, self.step, &self.draft, session),
            None => RenderState::empty(self.mode, self.step, &self.draft),
        };
        state.source = self.source.clone();
        state.status = self.status.clone();
        state.command_buffer = self.command_buffer.clone();
        state.scroll = self.scroll;
        state
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
