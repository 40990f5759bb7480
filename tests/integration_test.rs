use crossterm::event::{MouseButton, MouseEventKind};
use std::collections::BTreeSet;
use std::io::Write;
use textan::app::{App, AppEvent, AppMode};
use textan::engine::config::SelectionConfig;
use textan::input::load_report;
use textan::report::{tokenize, ReportSession, SelectionModel, TokenKind};
use textan::ui::{layout_tokens, PointerTracker};

#[test]
fn end_to_end_annotation() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all("Ahoj, svete.".as_bytes()).unwrap();

    let report = load_report(file.path().to_str().unwrap()).expect("Should load report");
    let tokens = tokenize(&report.text);
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Ahoj", ",", " ", "svete", "."]);

    let mut model = SelectionModel::new_with_default_config(tokens.len());
    model.on_press(0).unwrap();
    assert_eq!(model.current_selection(), BTreeSet::from([0]));
    model.on_drag_enter(2).unwrap();
    assert_eq!(model.current_selection(), BTreeSet::from([0, 1, 2]));
    model.on_drag_enter(4).unwrap();
    model.on_release();
    assert_eq!(model.current_selection(), BTreeSet::from([0, 1, 2, 3, 4]));
}

#[test]
fn empty_report_and_fresh_model() {
    assert!(tokenize("").is_empty());
    let model = SelectionModel::new_with_default_config(0);
    assert!(model.current_selection().is_empty());
}

#[test]
fn separators_only_report() {
    let tokens = tokenize(",,,");
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Separator && t.text == ","));
}

#[test]
fn mouse_gesture_over_laid_out_tokens() {
    let mut session = ReportSession::new("Ahoj, svete.", SelectionConfig::default());
    let layout = layout_tokens(session.tokens(), 80);
    let mut tracker = PointerTracker::new();

    // press on "svete", drag left across the comma onto "Ahoj", release off-text
    let gesture = [
        (MouseEventKind::Down(MouseButton::Left), layout.hit_test(7, 0)),
        (MouseEventKind::Drag(MouseButton::Left), layout.hit_test(8, 0)),
        (MouseEventKind::Drag(MouseButton::Left), layout.hit_test(4, 0)),
        (MouseEventKind::Drag(MouseButton::Left), layout.hit_test(1, 0)),
        (MouseEventKind::Up(MouseButton::Left), layout.hit_test(40, 0)),
    ];
    for (kind, hit) in gesture {
        match tracker.handle(kind, hit) {
            Some(AppEvent::Press(i)) => session.press(i).unwrap(),
            Some(AppEvent::DragEnter(i)) => session.drag_enter(i).unwrap(),
            Some(AppEvent::Release) => session.release(),
            _ => {}
        }
    }

    assert_eq!(
        session.selection().current_selection(),
        BTreeSet::from([0, 1, 2, 3])
    );
    assert_eq!(session.selected_text().as_deref(), Some("Ahoj, svete"));
}

#[test]
fn wizard_flow() {
    let mut app = App::new();
    app.handle_event(AppEvent::Next);
    assert_eq!(app.mode(), AppMode::Entities);

    app.handle_event(AppEvent::Press(0));
    app.handle_event(AppEvent::Release);
    app.handle_event(AppEvent::Annotate);
    assert_eq!(app.session().unwrap().entities()[0].text, "Ahoj");

    app.handle_event(AppEvent::Next);
    assert_eq!(app.mode(), AppMode::Done);
    assert_eq!(app.get_render_state().entities.len(), 1);
}
