use crate::app::AppEvent;
use crossterm::event::{MouseButton, MouseEventKind};

/// Turns raw mouse events into token press / drag-enter / release events.
///
/// Terminals report every drag step; a `DragEnter` is emitted only when the
/// pointer moves onto a different token than the one last entered.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_entered: Option<usize>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `hit` is the token under the pointer, if any.
    pub fn handle(&mut self, kind: MouseEventKind, hit: Option<usize>) -> Option<AppEvent> {
        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let index = hit?;
                self.last_entered = Some(index);
                Some(AppEvent::Press(index))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let index = hit?;
                if self.last_entered == Some(index) {
                    return None;
                }
                self.last_entered = Some(index);
                Some(AppEvent::DragEnter(index))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.last_entered = None;
                Some(AppEvent::Release)
            }
            MouseEventKind::ScrollDown => Some(AppEvent::Scroll(1)),
            MouseEventKind::ScrollUp => Some(AppEvent::Scroll(-1)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_on_token() {
        let mut tracker = PointerTracker::new();
        let event = tracker.handle(MouseEventKind::Down(MouseButton::Left), Some(2));
        assert_eq!(event, Some(AppEvent::Press(2)));
    }

    #[test]
    fn test_press_on_empty_space_ignored() {
        let mut tracker = PointerTracker::new();
        assert_eq!(
            tracker.handle(MouseEventKind::Down(MouseButton::Left), None),
            None
        );
    }

    #[test]
    fn test_drag_emits_only_on_token_change() {
        let mut tracker = PointerTracker::new();
        tracker.handle(MouseEventKind::Down(MouseButton::Left), Some(0));

        let drag = MouseEventKind::Drag(MouseButton::Left);
        assert_eq!(tracker.handle(drag, Some(0)), None);
        assert_eq!(tracker.handle(drag, Some(1)), Some(AppEvent::DragEnter(1)));
        assert_eq!(tracker.handle(drag, Some(1)), None);
        assert_eq!(tracker.handle(drag, None), None);
        assert_eq!(tracker.handle(drag, Some(0)), Some(AppEvent::DragEnter(0)));
    }

    #[test]
    fn test_release_anywhere() {
        let mut tracker = PointerTracker::new();
        tracker.handle(MouseEventKind::Down(MouseButton::Left), Some(3));
        assert_eq!(
            tracker.handle(MouseEventKind::Up(MouseButton::Left), None),
            Some(AppEvent::Release)
        );
        // a new gesture re-enters the same token
        assert_eq!(
            tracker.handle(MouseEventKind::Drag(MouseButton::Left), Some(3)),
            Some(AppEvent::DragEnter(3))
        );
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut tracker = PointerTracker::new();
        assert_eq!(
            tracker.handle(MouseEventKind::Down(MouseButton::Right), Some(1)),
            None
        );
        assert_eq!(tracker.handle(MouseEventKind::Moved, Some(1)), None);
    }

    #[test]
    fn test_scroll_wheel() {
        let mut tracker = PointerTracker::new();
        assert_eq!(
            tracker.handle(MouseEventKind::ScrollDown, None),
            Some(AppEvent::Scroll(1))
        );
        assert_eq!(
            tracker.handle(MouseEventKind::ScrollUp, None),
            Some(AppEvent::Scroll(-1))
        );
    }
}
