//! Registry core.
//!
//! This module contains the event registry itself. The only public API from
//! this module is [`Registry`], which owns the event → listeners mapping and
//! performs the synchronous fan-out.
//!
//! Internal modules:
//! - [`registry`]: subscribe / publish / unsubscribe and introspection.

mod registry;

pub use registry::Registry;
