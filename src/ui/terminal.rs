use crate::app::{App, AppMode};
use crate::ui::layout::{layout_tokens, TokenLayout};
use crate::ui::pointer::PointerTracker;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crate::ui::view::{
    render_draft, render_entity_summary, render_status_line, render_tokens, title_block,
    max_offset, visible_offset,
};
use crossterm::event::{self, Event, KeyEventKind, MouseEvent};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};
use std::io::{self, Stdout};

/// Where the tokens were drawn in the last frame.
struct TokenView {
    area: Rect,
    layout: TokenLayout,
    offset: usize,
    /// Largest useful scroll for this area and layout.
    max_offset: usize,
}

impl TokenView {
    fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let inside = column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height;
        if !inside {
            return None;
        }
        self.layout
            .hit_test(column - self.area.x, usize::from(row - self.area.y) + self.offset)
    }
}

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    pointer: PointerTracker,
    token_view: Option<TokenView>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(theme: Theme) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            theme,
            pointer: PointerTracker::new(),
            token_view: None,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let tick_rate = app.config().wizard.tick_rate();
        self.render_frame(app)?;
        self.sync_scroll_limit(app);

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            if !event::poll(tick_rate)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Mouse(mouse) => self.handle_mouse(app, mouse),
                Event::Resize(_, _) => {}
                _ => continue,
            }

            self.render_frame(app)?;
            self.sync_scroll_limit(app);
        }
    }

    fn sync_scroll_limit(&self, app: &mut App) {
        if let Some(view) = &self.token_view {
            app.set_scroll_limit(view.max_offset);
        }
    }

    fn handle_mouse(&mut self, app: &mut App, mouse: MouseEvent) {
        if app.mode() != AppMode::Entities {
            return;
        }
        let hit = self
            .token_view
            .as_ref()
            .and_then(|view| view.hit_test(mouse.column, mouse.row));
        if let Some(event) = self.pointer.handle(mouse.kind, hit) {
            app.handle_event(event);
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();
        let theme = self.theme;
        let mut token_view = None;

        self.terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            let block = title_block(&state, &theme);
            let inner = block.inner(chunks[0]);
            frame.render_widget(block, chunks[0]);

            match state.step {
                AppMode::Entities => {
                    let layout = layout_tokens(&state.tokens, inner.width);
                    let offset = visible_offset(state.scroll, layout.rows(), inner.height);
                    let max_offset = max_offset(layout.rows(), inner.height);
                    let tokens = render_tokens(&state, &layout, &theme, offset, inner.height);
                    frame.render_widget(tokens, inner);
                    token_view = Some(TokenView {
                        area: inner,
                        layout,
                        offset,
                        max_offset,
                    });
                }
                AppMode::Done => {
                    frame.render_widget(render_entity_summary(&state.entities, &theme), inner);
                }
                _ => frame.render_widget(render_draft(&state.draft, &theme), inner),
            }

            frame.render_widget(render_status_line(&state, &theme), chunks[1]);
        })?;

        self.token_view = token_view;
        Ok(())
    }
}
