//! Flash messages and toasts.
//!
//! Both follow the same lifecycle: shown → leaving (fade) → removed. The board
//! only tracks state; the caller runs the auto-dismiss and fade timers.

use crate::types::NoticeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    pub phase: NoticePhase,
}

impl Notice {
    /// Inline style for the fade-out transition.
    pub fn style(&self) -> &'static str {
        match self.phase {
            NoticePhase::Shown => "",
            NoticePhase::Leaving => "opacity: 0; transform: translateY(-10px);",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.notices.push(Notice {
            id: self.next_id,
            kind,
            message: message.into(),
            phase: NoticePhase::Shown,
        });
        self.next_id
    }

    /// Start fading `id` out. Returns `false` if it is already leaving or gone,
    /// so the caller only arms one removal timer.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.notices.iter_mut().find(|n| n.id == id) {
            Some(n) if n.phase == NoticePhase::Shown => {
                n.phase = NoticePhase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        let mut board = NoticeBoard::new();
        let a = board.push(NoticeKind::Success, "Saved");
        let b = board.push(NoticeKind::Error, "Failed");
        assert!(b > a);
        let messages: Vec<_> = board.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["Saved", "Failed"]);
    }

    #[test]
    fn dismiss_fades_then_removes() {
        let mut board = NoticeBoard::new();
        let id = board.push(NoticeKind::Info, "Hello");
        assert!(board.begin_dismiss(id));
        assert_eq!(board.iter().next().unwrap().phase, NoticePhase::Leaving);
        assert!(board.iter().next().unwrap().style().contains("opacity: 0"));
        assert!(board.remove(id));
        assert!(board.is_empty());
    }

    #[test]
    fn second_dismiss_is_a_no_op() {
        let mut board = NoticeBoard::new();
        let id = board.push(NoticeKind::Info, "Hello");
        assert!(board.begin_dismiss(id));
        // Auto-dismiss timer firing after a manual close.
        assert!(!board.begin_dismiss(id));
        assert!(board.remove(id));
        assert!(!board.begin_dismiss(id));
        assert!(!board.remove(id));
    }

    #[test]
    fn removing_one_keeps_the_rest() {
        let mut board = NoticeBoard::new();
        let a = board.push(NoticeKind::Info, "a");
        board.push(NoticeKind::Info, "b");
        board.remove(a);
        assert_eq!(board.len(), 1);
        assert_eq!(board.iter().next().unwrap().message, "b");
    }
}
