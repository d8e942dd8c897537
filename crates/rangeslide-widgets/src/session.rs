#![forbid(unsafe_code)]

//! Drag sessions and their scoped pointer listeners.
//!
//! Every drag owns exactly two listeners (pointer-move and pointer-up) for
//! the lifetime of its [`DragSession`] handle. The handle is returned by
//! [`RangeSlider::begin_drag`](crate::RangeSlider::begin_drag) and released
//! either by [`RangeSlider::end_drag`](crate::RangeSlider::end_drag), which
//! consumes it, or by dropping it. After release no listener for that session
//! remains, so a move arriving after the pointer-up has nothing to reach.
//!
//! # Invariants
//!
//! 1. A thumb that is not dragging has zero registered listeners.
//! 2. A live session has exactly one move and one up listener.
//! 3. Releasing a session twice is a no-op.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::thumb::ThumbId;

/// Identifier of one drag session, unique per slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Kind of listener a drag session holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerEntry {
    session: SessionId,
    thumb: ThumbId,
    kind: ListenerKind,
}

/// Listener bookkeeping shared between a slider and its live sessions.
#[derive(Debug, Default)]
pub(crate) struct ListenerSet {
    entries: Vec<ListenerEntry>,
    next_session: u64,
}

impl ListenerSet {
    pub(crate) fn attach(&mut self, thumb: ThumbId) -> SessionId {
        self.next_session = self.next_session.saturating_add(1);
        let session = SessionId(self.next_session);
        for kind in [ListenerKind::PointerMove, ListenerKind::PointerUp] {
            self.entries.push(ListenerEntry {
                session,
                thumb,
                kind,
            });
        }
        session
    }

    /// Remove every listener of `session`; returns how many were removed.
    pub(crate) fn detach(&mut self, session: SessionId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.session != session);
        before - self.entries.len()
    }

    pub(crate) fn is_attached(&self, session: SessionId) -> bool {
        self.entries.iter().any(|entry| entry.session == session)
    }

    pub(crate) fn count_for(&self, thumb: ThumbId) -> usize {
        self.entries.iter().filter(|entry| entry.thumb == thumb).count()
    }

    pub(crate) fn kinds_for(&self, thumb: ThumbId) -> Vec<ListenerKind> {
        self.entries
            .iter()
            .filter(|entry| entry.thumb == thumb)
            .map(|entry| entry.kind)
            .collect()
    }
}

pub(crate) type SharedListeners = Rc<RefCell<ListenerSet>>;

/// Owned handle for one thumb's drag session.
///
/// Not `Clone`: there is exactly one handle per session, and giving it up
/// (via `end_drag` or `Drop`) detaches the session's listeners.
#[derive(Debug)]
#[must_use = "dropping a DragSession ends the drag immediately"]
pub struct DragSession {
    id: SessionId,
    thumb: ThumbId,
    listeners: Weak<RefCell<ListenerSet>>,
}

impl DragSession {
    pub(crate) fn new(id: SessionId, thumb: ThumbId, listeners: &SharedListeners) -> Self {
        Self {
            id,
            thumb,
            listeners: Rc::downgrade(listeners),
        }
    }

    /// Session id.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Thumb being dragged.
    #[must_use]
    pub const fn thumb(&self) -> ThumbId {
        self.thumb
    }

    /// True if this session was issued by the slider owning `listeners`.
    pub(crate) fn belongs_to(&self, listeners: &SharedListeners) -> bool {
        std::ptr::eq(self.listeners.as_ptr(), Rc::as_ptr(listeners))
    }

    /// Detach this session's listeners; safe to call more than once.
    pub(crate) fn release(&self) -> usize {
        match self.listeners.upgrade() {
            Some(listeners) => listeners
                .try_borrow_mut()
                .map(|mut set| set.detach(self.id))
                .unwrap_or(0),
            None => 0,
        }
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        let removed = self.release();
        if removed > 0 {
            tracing::debug!(
                message = "slider.drag.dropped",
                thumb = self.thumb.as_str(),
                session = self.id.get(),
                removed
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DragSession, ListenerKind, ListenerSet};
    use crate::thumb::ThumbId;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn attach_registers_move_and_up() {
        let mut set = ListenerSet::default();
        let session = set.attach(ThumbId::Low);
        assert!(set.is_attached(session));
        assert_eq!(
            set.kinds_for(ThumbId::Low),
            vec![ListenerKind::PointerMove, ListenerKind::PointerUp]
        );
        assert_eq!(set.count_for(ThumbId::High), 0);
    }

    #[test]
    fn detach_is_idempotent() {
        let mut set = ListenerSet::default();
        let session = set.attach(ThumbId::High);
        assert_eq!(set.detach(session), 2);
        assert_eq!(set.detach(session), 0);
        assert_eq!(set.count_for(ThumbId::High), 0);
    }

    #[test]
    fn session_ids_are_unique() {
        let mut set = ListenerSet::default();
        let a = set.attach(ThumbId::Low);
        let b = set.attach(ThumbId::Low);
        assert_ne!(a, b);
        assert_eq!(set.count_for(ThumbId::Low), 4);
        set.detach(a);
        assert!(set.is_attached(b));
        assert_eq!(set.count_for(ThumbId::Low), 2);
    }

    #[test]
    fn dropping_handle_detaches() {
        let listeners = Rc::new(RefCell::new(ListenerSet::default()));
        let id = listeners.borrow_mut().attach(ThumbId::Low);
        let session = DragSession::new(id, ThumbId::Low, &listeners);
        assert!(session.belongs_to(&listeners));
        drop(session);
        assert_eq!(listeners.borrow().count_for(ThumbId::Low), 0);
    }

    #[test]
    fn handle_outliving_slider_is_harmless() {
        let listeners = Rc::new(RefCell::new(ListenerSet::default()));
        let id = listeners.borrow_mut().attach(ThumbId::High);
        let session = DragSession::new(id, ThumbId::High, &listeners);
        drop(listeners);
        assert_eq!(session.release(), 0);
    }

    #[test]
    fn foreign_listener_set_is_detected() {
        let ours = Rc::new(RefCell::new(ListenerSet::default()));
        let theirs = Rc::new(RefCell::new(ListenerSet::default()));
        let id = theirs.borrow_mut().attach(ThumbId::Low);
        let session = DragSession::new(id, ThumbId::Low, &theirs);
        assert!(!session.belongs_to(&ours));
    }
}
