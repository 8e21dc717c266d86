//! # Listener handles and their identity.
//!
//! A [`Listener`] is the shared handle the registry stores: an `Arc` around a
//! [`Handle`] implementation. Cloning a listener is cheap and keeps its
//! identity, so the clone can later be used to unsubscribe.
//!
//! ## Identity
//! Two listeners are the same subscription exactly when they point at the same
//! allocation. Listeners built separately from identical closures are two
//! different subscriptions.
//!
//! ```text
//! let a = Listener::from_fn("a", f);   ──► Arc #1
//! let b = a.clone();                   ──► Arc #1   (a == b)
//! let c = Listener::from_fn("a", f);   ──► Arc #2   (a != c)
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::HandlerResult;
use crate::subscribers::handle::{Handle, HandlerFn};

/// Shared, identity-comparable handle to a handler for payload `P`.
pub struct Listener<P: 'static> {
    inner: Arc<dyn Handle<P>>,
}

impl<P: 'static> Listener<P> {
    /// Wraps a handler into a new listener (new identity).
    pub fn new<H: Handle<P>>(handler: H) -> Self {
        Self {
            inner: Arc::new(handler),
        }
    }

    /// Creates a listener from a fallible closure.
    ///
    /// ## Example
    /// ```rust
    /// use evbus::Listener;
    ///
    /// let l = Listener::from_fn("len-check", |s: &String| {
    ///     if s.len() > 3 { Err("too long".into()) } else { Ok(()) }
    /// });
    /// assert_eq!(l.name(), "len-check");
    /// assert!(l.handle(&"abcd".to_string()).is_err());
    /// ```
    pub fn from_fn<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&P) -> HandlerResult + Send + Sync + 'static,
    {
        Self::new(HandlerFn::new(name, f))
    }

    /// Creates a listener from a closure that cannot fail.
    pub fn infallible<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        Self::from_fn(name, move |payload: &P| {
            f(payload);
            Ok(())
        })
    }

    /// Invokes the underlying handler.
    #[inline]
    pub fn handle(&self, payload: &P) -> HandlerResult {
        self.inner.handle(payload)
    }

    /// Handler name (for logs and errors).
    #[inline]
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Returns `true` if both handles refer to the same subscription.
    #[inline]
    pub fn same(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }

    /// Address of the shared handler; stable for the listener's lifetime.
    #[inline]
    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner).cast::<()>() as usize
    }
}

impl<P: 'static> Clone for Listener<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: 'static> PartialEq for Listener<P> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<P: 'static> Eq for Listener<P> {}

impl<P: 'static> From<Arc<dyn Handle<P>>> for Listener<P> {
    fn from(inner: Arc<dyn Handle<P>>) -> Self {
        Self { inner }
    }
}

impl<P: 'static> fmt::Debug for Listener<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("name", &self.name())
            .field("addr", &format_args!("{:#x}", self.addr()))
            .finish()
    }
}
