// Event listener registrations with guaranteed release
//
// A page registers on mount and holds the returned guard. Dropping the page
// (navigating away) drops the guard, which deregisters the listener.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    KeyDown,
    Resize,
}

/// Shared registry; clones refer to the same registrations
#[derive(Debug, Clone, Default)]
pub struct Listeners {
    active: Rc<RefCell<HashMap<ListenerKind, usize>>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, kind: ListenerKind) -> ListenerGuard {
        *self.active.borrow_mut().entry(kind).or_insert(0) += 1;
        tracing::debug!(?kind, "listener registered");
        ListenerGuard {
            kind,
            registry: Rc::clone(&self.active),
        }
    }

    pub fn count(&self, kind: ListenerKind) -> usize {
        self.active.borrow().get(&kind).copied().unwrap_or(0)
    }

    pub fn is_registered(&self, kind: ListenerKind) -> bool {
        self.count(kind) > 0
    }
}

/// Deregisters its listener when dropped
#[derive(Debug)]
pub struct ListenerGuard {
    kind: ListenerKind,
    registry: Rc<RefCell<HashMap<ListenerKind, usize>>>,
}

impl ListenerGuard {
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let mut active = self.registry.borrow_mut();
        if let Some(count) = active.get_mut(&self.kind) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                active.remove(&self.kind);
            }
        }
        tracing::debug!(kind = ?self.kind, "listener released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let listeners = Listeners::new();
        {
            let _resize = listeners.register(ListenerKind::Resize);
            assert!(listeners.is_registered(ListenerKind::Resize));
            assert!(!listeners.is_registered(ListenerKind::KeyDown));
        }
        assert_eq!(listeners.count(ListenerKind::Resize), 0);
    }

    #[test]
    fn test_counts_multiple_registrations() {
        let listeners = Listeners::new();
        let a = listeners.register(ListenerKind::KeyDown);
        let b = listeners.clone().register(ListenerKind::KeyDown);
        assert_eq!(listeners.count(ListenerKind::KeyDown), 2);

        drop(a);
        assert_eq!(listeners.count(ListenerKind::KeyDown), 1);
        assert_eq!(b.kind(), ListenerKind::KeyDown);
        drop(b);
        assert!(!listeners.is_registered(ListenerKind::KeyDown));
    }
}
