//! # Event handlers for the registry.
//!
//! This module provides the [`Handle`] trait, the [`Listener`] identity handle
//! the registry stores, and the per-event [`ListenerSet`].
//!
//! ## Architecture
//! ```text
//! Handle<P> impl ──► Listener<P> (Arc, identity) ──► ListenerSet<P> (per event)
//!   │                     │                               │
//!   │  HandlerFn (closure)│ clone = same subscription     │ ordered, at most once
//!   │  LogWriter (opt.)   │                               │ snapshot() for fan-out
//! ```
//!
//! ## Implementing custom handlers
//! ```rust
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use evbus::{Handle, HandlerResult, Listener};
//!
//! #[derive(Default)]
//! struct Counter {
//!     seen: AtomicU64,
//! }
//!
//! impl Handle<u32> for Counter {
//!     fn handle(&self, _payload: &u32) -> HandlerResult {
//!         self.seen.fetch_add(1, Ordering::Relaxed);
//!         Ok(())
//!     }
//!     fn name(&self) -> &str { "counter" }
//! }
//!
//! let listener = Listener::new(Counter::default());
//! assert_eq!(listener.name(), "counter");
//! ```

mod handle;
mod listener;
mod listener_set;
#[cfg(feature = "logging")]
mod log;

pub use handle::{Handle, HandlerFn};
pub use listener::Listener;
pub use listener_set::ListenerSet;
pub(crate) use listener_set::ErasedSet;
#[cfg(feature = "logging")]
pub use log::LogWriter;
