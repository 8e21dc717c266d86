//! # LogWriter — simple payload recorder
//!
//! A minimal handler that records every payload of one event through
//! `tracing`. Use it for tests or demos.
//!
//! ## Example output (with `tracing_subscriber::fmt`)
//! ```text
//! INFO evbus::subscribers::log: event writer="LogWriter" event="foo" payload="hello"
//! INFO evbus::subscribers::log: event writer="LogWriter" event="bar" payload=123
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::error::HandlerResult;
use crate::events::Event;
use crate::subscribers::Handle;

/// Payload writer handler for event `E`.
pub struct LogWriter<E> {
    _event: PhantomData<fn() -> E>,
}

impl<E: Event> LogWriter<E> {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            _event: PhantomData,
        }
    }
}

impl<E: Event> Default for LogWriter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for LogWriter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LogWriter")
    }
}

impl<E> Handle<E::Payload> for LogWriter<E>
where
    E: Event,
    E::Payload: fmt::Debug,
{
    fn handle(&self, payload: &E::Payload) -> HandlerResult {
        tracing::info!(
            writer = Handle::<E::Payload>::name(self),
            event = E::NAME,
            ?payload,
            "event"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Listener, Registry};

    crate::events! {
        Greeting("greeting"): String;
    }

    #[test]
    fn writes_every_payload_without_failing() {
        let subscriber = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let registry = Registry::new();
            let writer = Listener::new(LogWriter::<Greeting>::new());
            assert_eq!(writer.name(), "LogWriter");
            registry.subscribe::<Greeting>(&writer);
            assert!(registry.publish::<Greeting>(&"hello".to_string()).is_ok());
        });
    }
}
