//! Typed broadcast channels.
//!
//! A [`Signal`] is owned by one widget. Application code subscribes with
//! [`Signal::connect`]; the widget fires it with [`Signal::emit`]. Slots run
//! synchronously, in subscription order, and receive a [`Context`] so they can
//! mutate the tree they were fired from.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::Context;

/// Opaque handle for a connected slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

/// A connected callback.
type Slot<T> = Rc<dyn Fn(&mut dyn Context, &T)>;

/// Subscriber list and id counter.
struct Slots<T> {
    /// Next id to hand out.
    next: u64,
    /// Connected slots in subscription order.
    entries: Vec<(ConnectionId, Slot<T>)>,
}

/// A typed broadcast channel.
pub struct Signal<T> {
    /// Subscribers, behind a `RefCell` so that connecting only needs `&self`.
    slots: RefCell<Slots<T>>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal").field("slots", &self.len()).finish()
    }
}

impl<T> Signal<T> {
    /// Construct a signal with no subscribers.
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Slots {
                next: 0,
                entries: Vec::new(),
            }),
        }
    }

    /// Subscribe a callback. Returns a handle for [`Signal::disconnect`].
    pub fn connect(&self, f: impl Fn(&mut dyn Context, &T) + 'static) -> ConnectionId {
        let mut slots = self.slots.borrow_mut();
        let id = ConnectionId(slots.next);
        slots.next += 1;
        slots.entries.push((id, Rc::new(f)));
        id
    }

    /// Remove a subscriber. Returns false if the handle was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        let mut slots = self.slots.borrow_mut();
        let before = slots.entries.len();
        slots.entries.retain(|(cid, _)| *cid != id);
        slots.entries.len() != before
    }

    /// Remove all subscribers.
    pub fn clear(&self) {
        self.slots.borrow_mut().entries.clear();
    }

    /// Number of connected slots.
    pub fn len(&self) -> usize {
        self.slots.borrow().entries.len()
    }

    /// True if nothing is connected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke every subscriber with `value`.
    ///
    /// The subscriber list is snapshotted before the first slot runs, so slots
    /// connected or disconnected during emission take effect on the next emit.
    pub fn emit(&self, ctx: &mut dyn Context, value: &T) {
        let snapshot: Vec<Slot<T>> = self
            .slots
            .borrow()
            .entries
            .iter()
            .map(|(_, slot)| Rc::clone(slot))
            .collect();
        for slot in snapshot {
            slot(ctx, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::core::testing::dummyctx::DummyContext;

    #[test]
    fn emit_in_order() {
        let sig = Signal::<u32>::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b", "c"] {
            let log = log.clone();
            sig.connect(move |_, v| log.borrow_mut().push(format!("{tag}{v}")));
        }
        sig.emit(&mut DummyContext::default(), &7);
        assert_eq!(*log.borrow(), vec!["a7", "b7", "c7"]);
    }

    #[test]
    fn emit_without_subscribers() {
        let sig = Signal::<()>::new();
        sig.emit(&mut DummyContext::default(), &());
        assert!(sig.is_empty());
    }

    #[test]
    fn disconnect() {
        let sig = Signal::<()>::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let id = sig.connect(move |_, _| h.set(h.get() + 1));
        sig.emit(&mut DummyContext::default(), &());
        assert!(sig.disconnect(id));
        assert!(!sig.disconnect(id));
        sig.emit(&mut DummyContext::default(), &());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn connect_during_emit_is_deferred() {
        let sig = Rc::new(Signal::<()>::new());
        let hits = Rc::new(Cell::new(0));
        {
            let sig2 = Rc::downgrade(&sig);
            let hits = hits.clone();
            sig.connect(move |_, _| {
                hits.set(hits.get() + 1);
                if let Some(s) = sig2.upgrade() {
                    let hits = hits.clone();
                    s.connect(move |_, _| hits.set(hits.get() + 100));
                }
            });
        }
        let mut ctx = DummyContext::default();
        sig.emit(&mut ctx, &());
        assert_eq!(hits.get(), 1);
        assert_eq!(sig.len(), 2);
        sig.emit(&mut ctx, &());
        assert_eq!(hits.get(), 102);
    }

    #[test]
    fn disconnect_during_emit_is_deferred() {
        let sig = Rc::new(Signal::<()>::new());
        let hits = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(None));
        {
            let sig2 = Rc::downgrade(&sig);
            let second = second.clone();
            sig.connect(move |_, _| {
                if let (Some(s), Some(id)) = (sig2.upgrade(), second.get()) {
                    s.disconnect(id);
                }
            });
        }
        let h = hits.clone();
        second.set(Some(sig.connect(move |_, _| h.set(h.get() + 1))));
        let mut ctx = DummyContext::default();
        sig.emit(&mut ctx, &());
        assert_eq!(hits.get(), 1);
        sig.emit(&mut ctx, &());
        assert_eq!(hits.get(), 1);
    }
}
