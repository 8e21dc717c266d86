//! # ListenerSet: ordered, identity-deduplicated listeners of one event
//!
//! [`ListenerSet`] is what the registry keeps per event.
//!
//! ## Rules
//! - **Insertion order**: iteration and snapshots follow registration order.
//! - **At most once**: inserting a listener that is already present changes nothing.
//! - **Identity, not equality**: membership is decided by [`Listener::same`].
//! - **Re-insert goes last**: a removed listener added again is appended.
//!
//! ## Cost
//! Membership (`insert`, `contains`, the check in `take`) goes through an
//! address index and takes constant time. Removing a present listener shifts
//! the ordered list, so it is linear in the number of listeners of the event.
//!
//! ## Diagram
//! ```text
//!  insert(h1) insert(h2) insert(h1) remove(h1) insert(h1)
//!   [h1]      [h1,h2]    [h1,h2]    [h2]       [h2,h1]
//! ```

use std::any::Any;
use std::collections::HashSet;

use crate::subscribers::Listener;

/// Ordered set of listeners for a payload type `P`.
pub struct ListenerSet<P: 'static> {
    listeners: Vec<Listener<P>>,
    /// Addresses of `listeners`; kept in step with it.
    index: HashSet<usize>,
}

impl<P: 'static> ListenerSet<P> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            index: HashSet::new(),
        }
    }

    /// Appends `listener` unless it is already present.
    ///
    /// Returns `true` if it was inserted.
    pub fn insert(&mut self, listener: Listener<P>) -> bool {
        if !self.index.insert(listener.addr()) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Removes `listener` if present, keeping the order of the others.
    ///
    /// Returns `true` if it was removed.
    pub fn remove(&mut self, listener: &Listener<P>) -> bool {
        self.take(listener).is_some()
    }

    /// Removes `listener` if present and hands back the stored handle.
    pub fn take(&mut self, listener: &Listener<P>) -> Option<Listener<P>> {
        if !self.index.remove(&listener.addr()) {
            return None;
        }
        let idx = self.listeners.iter().position(|l| l.same(listener))?;
        Some(self.listeners.remove(idx))
    }

    /// Returns `true` if `listener` (by identity) is in the set.
    pub fn contains(&self, listener: &Listener<P>) -> bool {
        self.index.contains(&listener.addr())
    }

    /// Number of listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if the set holds no listener.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Iterates listeners in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Listener<P>> {
        self.listeners.iter()
    }

    /// Copies the current listeners (cheap `Arc` clones) in registration order.
    ///
    /// The copy is detached: later inserts/removes on the set do not affect it.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Listener<P>> {
        self.listeners.clone()
    }
}

impl<P: 'static> Default for ListenerSet<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Type-erased view of a [`ListenerSet`], stored by the registry.
pub(crate) trait ErasedSet: Send {
    fn len(&self) -> usize;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<P: 'static> ErasedSet for ListenerSet<P> {
    fn len(&self) -> usize {
        ListenerSet::len(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &'static str) -> Listener<i32> {
        Listener::infallible(name, |_: &i32| {})
    }

    fn names(set: &ListenerSet<i32>) -> Vec<String> {
        set.iter().map(|l| l.name().to_string()).collect()
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = ListenerSet::new();
        let h1 = named("h1");
        assert!(set.insert(h1.clone()));
        assert!(!set.insert(h1.clone()));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&h1));
    }

    #[test]
    fn remove_keeps_order_of_others() {
        let mut set = ListenerSet::new();
        let (a, b, c) = (named("a"), named("b"), named("c"));
        set.insert(a.clone());
        set.insert(b.clone());
        set.insert(c.clone());
        assert!(set.remove(&b));
        assert!(!set.remove(&b));
        assert_eq!(names(&set), ["a", "c"]);
    }

    #[test]
    fn reinsert_after_remove_goes_last() {
        let mut set = ListenerSet::new();
        let (h1, h2) = (named("h1"), named("h2"));
        set.insert(h1.clone());
        set.insert(h2.clone());
        set.insert(h1.clone());
        set.remove(&h1);
        set.insert(h1.clone());
        assert_eq!(names(&set), ["h2", "h1"]);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut set = ListenerSet::new();
        let h1 = named("h1");
        set.insert(h1.clone());
        let snap = set.snapshot();
        set.remove(&h1);
        set.insert(named("h2"));
        assert_eq!(snap.len(), 1);
        assert!(snap[0].same(&h1));
        assert_eq!(names(&set), ["h2"]);
    }

    #[test]
    fn index_tracks_many_listeners() {
        let mut set = ListenerSet::new();
        let all: Vec<_> = (0..1_000).map(|_| named("h")).collect();
        for l in &all {
            assert!(set.insert(l.clone()));
        }
        for l in &all {
            assert!(!set.insert(l.clone()));
        }
        assert_eq!(set.len(), all.len());

        for l in all.iter().step_by(2) {
            assert!(set.remove(l));
        }
        assert_eq!(set.len(), all.len() / 2);
        assert!(all.iter().step_by(2).all(|l| !set.contains(l)));
        assert!(all.iter().skip(1).step_by(2).all(|l| set.contains(l)));

        let kept: Vec<_> = all.iter().skip(1).step_by(2).collect();
        assert!(set.iter().zip(&kept).all(|(a, b)| a.same(b)));
    }

    #[test]
    fn erased_view_downcasts_to_concrete_set() {
        let mut set = ListenerSet::new();
        set.insert(named("h1"));
        let mut erased: Box<dyn ErasedSet> = Box::new(set);
        assert_eq!(erased.len(), 1);
        assert!(erased.as_any().downcast_ref::<ListenerSet<i32>>().is_some());
        assert!(erased.as_any().downcast_ref::<ListenerSet<u8>>().is_none());
        let typed = erased.as_any_mut().downcast_mut::<ListenerSet<i32>>();
        assert!(typed.is_some_and(|s| !s.remove(&named("other"))));
    }
}
