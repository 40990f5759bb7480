use crate::app::{AppMode, RenderState, StatusKind, TokenStyle};
use crate::report::Entity;
use crate::ui::layout::{display_text, TokenLayout};
use crate::ui::theme::Theme;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// First visible layout row, with `scroll` clamped so the last row stays on screen.
pub fn visible_offset(scroll: usize, rows: usize, height: u16) -> usize {
    scroll.min(max_offset(rows, height))
}

/// Largest first row that still fills the viewport.
pub fn max_offset(rows: usize, height: u16) -> usize {
    rows.saturating_sub(usize::from(height))
}

pub fn token_style(style: TokenStyle, theme: &Theme) -> Style {
    let mut result = Style::default().fg(theme.text);
    if style.selected {
        result = result.bg(theme.selected);
    }
    if style.in_entity {
        result = result.add_modifier(Modifier::UNDERLINED);
    }
    if style.anchor {
        result = result.fg(theme.anchor).add_modifier(Modifier::BOLD);
    }
    result
}

/// One line per visible layout row, one span per token.
pub fn token_lines(
    state: &RenderState,
    layout: &TokenLayout,
    theme: &Theme,
    offset: usize,
    height: u16,
) -> Vec<Line<'static>> {
    let last = offset.saturating_add(usize::from(height)).min(layout.rows());
    (offset..last)
        .map(|row| {
            let spans: Vec<Span<'static>> = layout
                .row_cells(row)
                .filter(|cell| cell.width > 0)
                .filter_map(|cell| {
                    let token = state.tokens.get(cell.index)?;
                    Some(Span::styled(
                        display_text(token).to_string(),
                        token_style(state.token_style(cell.index), theme),
                    ))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Draws the laid-out tokens starting at layout row `offset`.
pub fn render_tokens(
    state: &RenderState,
    layout: &TokenLayout,
    theme: &Theme,
    offset: usize,
    height: u16,
) -> Paragraph<'static> {
    Paragraph::new(token_lines(state, layout, theme, offset, height))
        .style(Style::default().bg(theme.background))
}

pub fn render_draft(draft: &str, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(draft.to_string())
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(theme.text).bg(theme.background))
}

pub fn entity_summary_lines(entities: &[Entity], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Report created successfully",
        Style::default().fg(theme.anchor).add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(""));
    if entities.is_empty() {
        lines.push(Line::from(Span::styled(
            "No entities annotated.",
            Style::default().fg(theme.dimmed),
        )));
    }
    for (i, entity) in entities.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>3}. [{}..{}] ", i + 1, entity.range.lo, entity.range.hi),
                Style::default().fg(theme.dimmed),
            ),
            Span::styled(entity.text.trim().to_string(), Style::default().fg(theme.text)),
        ]));
    }
    lines
}

pub fn render_entity_summary(entities: &[Entity], theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(entity_summary_lines(entities, theme))
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.background))
}

pub fn title_block(state: &RenderState, theme: &Theme) -> Block<'static> {
    let step = match state.step {
        AppMode::Edit => "1/2 Edit report",
        AppMode::Entities => "2/2 Select entities",
        AppMode::Done => "Done",
        _ => "",
    };
    let title = match &state.source {
        Some(source) => format!(" Report Wizard - {} ({}) ", step, source),
        None => format!(" Report Wizard - {} ", step),
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.dimmed))
        .style(Style::default().bg(theme.background))
}

pub fn render_status_line(state: &RenderState, theme: &Theme) -> Line<'static> {
    if state.mode == AppMode::Command {
        return Line::from(vec![
            Span::styled(":", Style::default().fg(theme.anchor)),
            Span::styled(state.command_buffer.clone(), Style::default().fg(theme.text)),
        ]);
    }

    let mut spans = vec![Span::styled(
        format!(" {} ", state.mode.label()),
        Style::default()
            .fg(theme.background)
            .bg(theme.dimmed)
            .add_modifier(Modifier::BOLD),
    )];

    if state.mode == AppMode::Entities {
        spans.push(Span::styled(
            format!(
                " {} tokens, {} selected, {} entities ",
                state.tokens.len(),
                state.selected_count(),
                state.entities.len()
            ),
            Style::default().fg(theme.dimmed),
        ));
    }

    if let Some(status) = &state.status {
        let color = match status.kind {
            StatusKind::Info => theme.text,
            StatusKind::Warning => theme.anchor,
        };
        spans.push(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color),
        ));
    }

    Line::from(spans).alignment(Alignment::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::StatusMessage;
    use crate::engine::config::SelectionConfig;
    use crate::report::ReportSession;
    use crate::ui::layout::layout_tokens;

    fn entities_state() -> RenderState {
        let mut session = ReportSession::new("Ahoj, svete.\nDruhy radek", SelectionConfig::default());
        session.press(0).unwrap();
        session.drag_enter(3).unwrap();
        RenderState::from_session(AppMode::Entities, AppMode::Entities, "", &session)
    }

    #[test]
    fn test_visible_offset_clamps() {
        assert_eq!(visible_offset(0, 10, 4), 0);
        assert_eq!(visible_offset(3, 10, 4), 3);
        assert_eq!(visible_offset(9, 10, 4), 6);
        assert_eq!(visible_offset(5, 2, 4), 0);
    }

    #[test]
    fn test_token_style_selected_and_anchor() {
        let theme = Theme::default();
        let selected = token_style(
            TokenStyle {
                selected: true,
                ..TokenStyle::default()
            },
            &theme,
        );
        assert_eq!(selected.bg, Some(theme.selected));

        let anchor = token_style(
            TokenStyle {
                selected: true,
                anchor: true,
                in_entity: false,
            },
            &theme,
        );
        assert_eq!(anchor.fg, Some(theme.anchor));
        assert!(anchor.add_modifier.contains(Modifier::BOLD));
    }

    fn span_texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_token_lines_style_exactly_the_selection() {
        let state = entities_state();
        let theme = Theme::default();
        let layout = layout_tokens(&state.tokens, 40);
        assert_eq!(layout.rows(), 2);

        let lines = token_lines(&state, &layout, &theme, 0, 10);
        assert_eq!(lines.len(), 2);
        assert_eq!(span_texts(&lines[0]), vec!["Ahoj", ",", " ", "svete", "."]);
        assert_eq!(span_texts(&lines[1]), vec!["Druhy", " ", "radek"]);

        for span in &lines[0].spans[..4] {
            assert_eq!(span.style.bg, Some(theme.selected), "{:?}", span.content);
        }
        assert_ne!(lines[0].spans[4].style.bg, Some(theme.selected));
        for span in &lines[1].spans {
            assert_ne!(span.style.bg, Some(theme.selected), "{:?}", span.content);
        }
    }

    #[test]
    fn test_token_lines_anchor_is_bold() {
        let state = entities_state();
        let theme = Theme::default();
        let layout = layout_tokens(&state.tokens, 40);
        let lines = token_lines(&state, &layout, &theme, 0, 10);

        let anchor = &lines[0].spans[0];
        assert!(anchor.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(anchor.style.fg, Some(theme.anchor));
        let other = &lines[0].spans[3];
        assert!(!other.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_token_lines_respect_offset_and_height() {
        let state = entities_state();
        let layout = layout_tokens(&state.tokens, 40);
        let lines = token_lines(&state, &layout, &Theme::default(), 1, 10);
        assert_eq!(lines.len(), 1);
        assert_eq!(span_texts(&lines[0]), vec!["Druhy", " ", "radek"]);

        let lines = token_lines(&state, &layout, &Theme::default(), 0, 1);
        assert_eq!(lines.len(), 1);
        assert_eq!(span_texts(&lines[0])[0], "Ahoj");
    }

    #[test]
    fn test_token_lines_empty_report() {
        let state = RenderState::empty(AppMode::Entities, AppMode::Entities, "");
        let layout = layout_tokens(&state.tokens, 40);
        assert!(token_lines(&state, &layout, &Theme::default(), 0, 10).is_empty());
    }

    #[test]
    fn test_status_line_shows_counts() {
        let mut state = entities_state();
        state.status = Some(StatusMessage::warning("Nothing selected"));
        let line = render_status_line(&state, &Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("ENTITIES"));
        assert!(text.contains("4 selected"));
        assert!(text.contains("Nothing selected"));
    }

    #[test]
    fn test_status_line_command_mode() {
        let mut state = RenderState::empty(AppMode::Command, AppMode::Edit, "");
        state.command_buffer = "@zprava.txt".to_string();
        let line = render_status_line(&state, &Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, ":@zprava.txt");
    }

    #[test]
    fn test_entity_summary_lists_entities() {
        let mut session = ReportSession::new("Ahoj, svete.", SelectionConfig::default());
        session.press(0).unwrap();
        session.release();
        session.annotate();
        session.press(3).unwrap();
        session.drag_enter(4).unwrap();
        session.annotate();

        let lines = entity_summary_lines(session.entities(), &Theme::default());
        let texts: Vec<String> = lines.iter().map(|l| span_texts(l).concat()).collect();
        assert_eq!(texts[0], "Report created successfully");
        assert_eq!(texts[2], "  1. [0..0] Ahoj");
        assert_eq!(texts[3], "  2. [3..4] svete.");
        assert_eq!(texts.len(), 4);
    }

    #[test]
    fn test_entity_summary_without_entities() {
        let lines = entity_summary_lines(&[], &Theme::default());
        let texts: Vec<String> = lines.iter().map(|l| span_texts(l).concat()).collect();
        assert_eq!(texts.last().map(String::as_str), Some("No entities annotated."));
    }
}
