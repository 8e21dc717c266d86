//! Event schema.
//!
//! This module groups the compile-time contract that ties an event name to
//! its payload type.
//!
//! ## Contents
//! - [`Event`] marker trait (`NAME` + `Payload`)
//! - [`events!`](crate::events!) declaration macro
//!
//! ## Quick reference
//! - **Publishers** call `Registry::publish::<E>(&payload)`.
//! - **Listeners** implement `Handle<E::Payload>` and are subscribed with
//!   `Registry::subscribe::<E>(&listener)`.

mod event;

pub use event::Event;
