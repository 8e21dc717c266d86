//! # Event registry - typed, synchronous publish/subscribe.
//!
//! [`Registry`] maps each declared [`Event`] to the ordered set of listeners
//! subscribed to it, and fans published payloads out to them.
//!
//! ## Architecture
//! ```text
//! subscribe::<E>(&l) ──► lock ─► slots[E].insert(l) ─► unlock
//!
//! publish::<E>(&p)   ──► lock ─► snapshot = slots[E].clone() ─► unlock
//!                          │
//!                          └─► for l in snapshot (registration order):
//!                                 l.handle(&p)?   ─► first Err stops fan-out
//!
//! clear()                 ──► every slot dropped
//! unsubscribe_all::<E>()  ──► slots[E] dropped
//! unsubscribe::<E>(&l)    ──► slots[E].remove(l) (slot dropped once empty)
//! ```
//!
//! ## Rules
//! - The lock is never held while a listener runs.
//! - Listeners may re-enter the registry (subscribe, unsubscribe, publish);
//!   changes apply to later publishes only, never to the running fan-out.
//! - Unknown events, duplicate subscriptions and unknown listeners are silent no-ops.
//! - Listener failures are not isolated: the first `Err` is returned to the publisher.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::config::RegistryConfig;
use crate::error::{HandlerResult, PublishError};
use crate::events::Event;
use crate::subscribers::{ErasedSet, Listener, ListenerSet};

/// Listeners of one event, with the event's name kept for introspection.
struct Slot {
    name: &'static str,
    set: Box<dyn ErasedSet>,
}

impl Slot {
    fn new<E: Event>() -> Self {
        Self {
            name: E::NAME,
            set: Box::new(ListenerSet::<E::Payload>::new()),
        }
    }

    fn typed<E: Event>(&self) -> Option<&ListenerSet<E::Payload>> {
        self.set.as_any().downcast_ref()
    }

    fn typed_mut<E: Event>(&mut self) -> Option<&mut ListenerSet<E::Payload>> {
        self.set.as_any_mut().downcast_mut()
    }
}

/// Typed in-process event bus.
///
/// ## Example
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use evbus::{Listener, Registry};
///
/// evbus::events! {
///     Foo("foo"): String;
/// }
///
/// let registry = Registry::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// let h1 = Listener::infallible("h1", move |v: &String| {
///     sink.lock().unwrap().push(v.clone());
/// });
///
/// registry.subscribe::<Foo>(&h1);
/// registry.publish::<Foo>(&"hello".to_string())?;
/// registry.unsubscribe::<Foo>(&h1);
/// registry.publish::<Foo>(&"ignored".to_string())?;
///
/// assert_eq!(*seen.lock().unwrap(), ["hello"]);
/// # Ok::<(), evbus::PublishError>(())
/// ```
pub struct Registry {
    slots: Mutex<HashMap<TypeId, Slot>>,
    config: RegistryConfig,
}

impl Registry {
    /// Creates a registry with [`RegistryConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates a registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        let slots = config
            .capacity_hint()
            .map_or_else(HashMap::new, HashMap::with_capacity);
        Self {
            slots: Mutex::new(slots),
            config,
        }
    }

    /// Configuration this registry was created with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Subscribes `listener` to `E`.
    ///
    /// Creates the event's set on first use. Subscribing a listener that is
    /// already registered for `E` changes nothing.
    ///
    /// Returns `true` if the listener was newly added.
    pub fn subscribe<E: Event>(&self, listener: &Listener<E::Payload>) -> bool {
        let inserted = {
            let mut slots = self.slots();
            slots
                .entry(TypeId::of::<E>())
                .or_insert_with(Slot::new::<E>)
                .typed_mut::<E>()
                .is_some_and(|set| set.insert(listener.clone()))
        };
        debug!(
            registry = %self.config.label,
            event = E::NAME,
            listener = listener.name(),
            inserted,
            "subscribe"
        );
        inserted
    }

    /// Wraps `f` into a new [`Listener`], subscribes it to `E` and returns it.
    ///
    /// Keep the returned handle to unsubscribe later.
    pub fn subscribe_fn<E: Event>(
        &self,
        name: impl Into<std::borrow::Cow<'static, str>>,
        f: impl Fn(&E::Payload) -> HandlerResult + Send + Sync + 'static,
    ) -> Listener<E::Payload> {
        let listener = Listener::from_fn(name, f);
        self.subscribe::<E>(&listener);
        listener
    }

    /// Publishes `payload` to every listener of `E`.
    ///
    /// The listener set is copied before the first listener runs; listeners
    /// run in registration order on the caller's thread. An event without
    /// listeners is a no-op.
    ///
    /// # Errors
    /// Returns [`PublishError::Handler`] for the first listener that fails;
    /// the listeners after it in the copy are not invoked. Panics in listeners
    /// are not caught.
    pub fn publish<E: Event>(&self, payload: &E::Payload) -> Result<(), PublishError> {
        let snapshot = {
            let slots = self.slots();
            let set = slots.get(&TypeId::of::<E>()).and_then(|s| s.typed::<E>());
            match set {
                Some(set) if !set.is_empty() => set.snapshot(),
                _ => {
                    trace!(registry = %self.config.label, event = E::NAME, "publish: no listeners");
                    return Ok(());
                }
            }
        };

        trace!(
            registry = %self.config.label,
            event = E::NAME,
            listeners = snapshot.len(),
            "publish"
        );

        for (position, listener) in snapshot.iter().enumerate() {
            if let Err(source) = listener.handle(payload) {
                debug!(
                    registry = %self.config.label,
                    event = E::NAME,
                    listener = listener.name(),
                    position,
                    skipped = snapshot.len() - position - 1,
                    error = %source,
                    "listener failed; fan-out aborted"
                );
                return Err(PublishError::Handler {
                    event: E::NAME,
                    listener: listener.name().to_owned(),
                    position,
                    source,
                });
            }
        }
        Ok(())
    }

    /// Removes every listener of every event.
    ///
    /// Removed listeners are dropped after the lock is released, so their
    /// captured state may re-enter the registry on drop.
    pub fn clear(&self) {
        let taken = std::mem::take(&mut *self.slots());
        let dropped: usize = taken.values().map(|s| s.set.len()).sum();
        debug!(registry = %self.config.label, dropped, "clear");
    }

    /// Removes every listener of `E`; other events are untouched.
    ///
    /// Returns how many listeners were removed (`0` if `E` had none).
    /// Like [`clear`](Self::clear), they are dropped after the lock is released.
    pub fn unsubscribe_all<E: Event>(&self) -> usize {
        let taken = self.slots().remove(&TypeId::of::<E>());
        let dropped = taken.map_or(0, |slot| slot.set.len());
        debug!(registry = %self.config.label, event = E::NAME, dropped, "unsubscribe all");
        dropped
    }

    /// Removes `listener` from `E`; other listeners of `E` are untouched.
    ///
    /// Returns `true` if the listener was subscribed. The stored handle is
    /// dropped after the lock is released.
    pub fn unsubscribe<E: Event>(&self, listener: &Listener<E::Payload>) -> bool {
        let taken = {
            let mut slots = self.slots();
            let key = TypeId::of::<E>();
            let (taken, emptied) = match slots.get_mut(&key).and_then(|s| s.typed_mut::<E>()) {
                Some(set) => (set.take(listener), set.is_empty()),
                None => (None, false),
            };
            if emptied {
                slots.remove(&key);
            }
            taken
        };
        let removed = taken.is_some();
        debug!(
            registry = %self.config.label,
            event = E::NAME,
            listener = listener.name(),
            removed,
            "unsubscribe"
        );
        removed
    }

    /// Unsubscribes from `E`, dispatching on whether a listener is given.
    ///
    /// - `Some(listener)` → [`unsubscribe`](Self::unsubscribe)
    /// - `None` → [`unsubscribe_all`](Self::unsubscribe_all)
    pub fn off<E: Event>(&self, listener: Option<&Listener<E::Payload>>) {
        match listener {
            Some(listener) => {
                self.unsubscribe::<E>(listener);
            }
            None => {
                self.unsubscribe_all::<E>();
            }
        }
    }

    /// Number of listeners currently subscribed to `E`.
    pub fn listener_count<E: Event>(&self) -> usize {
        self.slots()
            .get(&TypeId::of::<E>())
            .map_or(0, |slot| slot.set.len())
    }

    /// Returns `true` if `E` has at least one listener.
    pub fn has_listeners<E: Event>(&self) -> bool {
        self.listener_count::<E>() > 0
    }

    /// Returns `true` if `listener` is subscribed to `E`.
    pub fn contains<E: Event>(&self, listener: &Listener<E::Payload>) -> bool {
        self.slots()
            .get(&TypeId::of::<E>())
            .and_then(|s| s.typed::<E>())
            .is_some_and(|set| set.contains(listener))
    }

    /// Returns sorted names of events that have at least one listener.
    pub fn event_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .slots()
            .values()
            .filter(|slot| slot.set.len() > 0)
            .map(|slot| slot.name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Returns `true` if no event has listeners.
    pub fn is_empty(&self) -> bool {
        self.slots().values().all(|slot| slot.set.len() == 0)
    }

    /// Locks the event map, recovering it if a previous holder panicked.
    ///
    /// No listener code runs under this lock, so a poisoned map is still consistent.
    fn slots(&self) -> MutexGuard<'_, HashMap<TypeId, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("label", &self.config.label)
            .field("events", &self.event_names())
            .finish()
    }
}
