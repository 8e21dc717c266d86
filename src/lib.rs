//! # evbus
//!
//! **evbus** is a small, typed, in-process publish/subscribe registry.
//!
//! Callers declare events (a name bound to a payload type), subscribe
//! listeners to them, publish payloads, and unsubscribe listeners one by one,
//! per event, or all at once. Everything runs synchronously on the caller's
//! thread: `publish` returns once every listener has run.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   events! { Foo("foo"): String; Bar("bar"): u32; }      (event schema)
//!
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Registry                                                         │
//! │  Mutex<HashMap<event, ListenerSet<Payload>>>                      │
//! │    Foo ──► [h1, h2, h3]   (registration order, at most once each) │
//! │    Bar ──► [h4]                                                   │
//! └──────┬───────────────────────────────────────────────────┬────────┘
//!        │ publish::<Foo>(&"hello")                          │ subscribe / unsubscribe
//!        ▼                                                   │ (from anywhere, including
//!   lock ─► snapshot [h1, h2, h3] ─► unlock                  │  from inside listeners)
//!        │                                                   │
//!        ├─► h1.handle(&"hello")  Ok                         │
//!        ├─► h2.handle(&"hello")  Err ─► PublishError (h3 skipped)
//!        └─► h3.handle(&"hello")                             │
//! ```
//!
//! ### Snapshot rule
//! ```text
//! publish::<Foo>  ──► snapshot taken ──► h1 runs ──► h1 subscribes h9, removes h3
//!                                         │
//!                                         └─► h2, h3 still run (snapshot)
//! next publish::<Foo> ──► [h1, h2, h9]
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                      |
//! |-------------------|---------------------------------------------------------------|-----------------------------------------|
//! | **Schema**        | Bind event names to payload types at compile time.            | [`Event`], [`events!`]                  |
//! | **Handlers**      | Closures or custom types reacting to payloads.                | [`Handle`], [`HandlerFn`], [`Listener`] |
//! | **Registry**      | Subscribe, publish, unsubscribe (one / per event / all).      | [`Registry`], [`ListenerSet`]           |
//! | **Errors**        | First listener failure aborts the fan-out and is returned.    | [`PublishError`], [`HandlerResult`]     |
//! | **Configuration** | Label for logs, initial capacity.                             | [`RegistryConfig`]                      |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] handler _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use evbus::{Listener, Registry};
//!
//! evbus::events! {
//!     Foo("foo"): String;
//!     Bar("bar"): u32;
//! }
//!
//! fn main() -> Result<(), evbus::PublishError> {
//!     let registry = Registry::new();
//!     let log = Arc::new(Mutex::new(Vec::new()));
//!
//!     let sink = Arc::clone(&log);
//!     let on_foo = Listener::infallible("on-foo", move |v: &String| {
//!         sink.lock().unwrap().push(format!("foo={v}"));
//!     });
//!     let sink = Arc::clone(&log);
//!     registry.subscribe::<Foo>(&on_foo);
//!     registry.subscribe_fn::<Bar>("on-bar", move |n| {
//!         sink.lock().unwrap().push(format!("bar={n}"));
//!         Ok(())
//!     });
//!
//!     registry.publish::<Foo>(&"hello".to_string())?;
//!     registry.publish::<Bar>(&123)?;
//!
//!     // Drop everything, then publish again: nothing runs.
//!     registry.clear();
//!     registry.publish::<Foo>(&"hello".to_string())?;
//!
//!     assert_eq!(*log.lock().unwrap(), ["foo=hello", "bar=123"]);
//!     Ok(())
//! }
//! ```
mod config;
mod core;
mod error;
mod events;
mod subscribers;

// ---- Public re-exports ----

pub use config::RegistryConfig;
pub use crate::core::Registry;
pub use error::{HandlerError, HandlerResult, PublishError};
pub use events::Event;
pub use subscribers::{Handle, HandlerFn, Listener, ListenerSet};

// Optional: expose a simple built-in logging handler (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
