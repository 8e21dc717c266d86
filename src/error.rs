//! Error types used by the registry and its listeners.
//!
//! - [`HandlerError`] / [`HandlerResult`]: what a listener returns.
//! - [`PublishError`]: what [`Registry::publish`](crate::Registry::publish)
//!   returns when a listener fails during fan-out.
//!
//! Subscribing twice, unsubscribing something unknown and publishing an event
//! nobody listens to are not errors; none of them has an error variant.

use thiserror::Error;

/// Boxed failure returned by a listener.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type returned by [`Handle::handle`](crate::Handle::handle).
pub type HandlerResult = Result<(), HandlerError>;

/// # Errors produced by [`Registry::publish`](crate::Registry::publish).
///
/// The registry does not isolate listeners: the first failing listener stops
/// the fan-out and its error is handed back to the publisher.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PublishError {
    /// A listener returned an error; listeners after it in the snapshot were not invoked.
    #[error("listener {listener:?} failed on event {event:?} (position {position}): {source}")]
    Handler {
        /// Name of the event being published.
        event: &'static str,
        /// Name of the failing listener.
        listener: String,
        /// Zero-based position of the listener in the fan-out snapshot.
        position: usize,
        /// The listener's own error.
        source: HandlerError,
    },
}

impl PublishError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use evbus::PublishError;
    ///
    /// let err = PublishError::Handler {
    ///     event: "foo",
    ///     listener: "audit".into(),
    ///     position: 0,
    ///     source: "boom".into(),
    /// };
    /// assert_eq!(err.as_label(), "publish_handler_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PublishError::Handler { .. } => "publish_handler_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            PublishError::Handler {
                event,
                listener,
                source,
                ..
            } => format!("event={event} listener={listener} error={source}"),
        }
    }

    /// Name of the event whose fan-out was interrupted.
    pub fn event(&self) -> &'static str {
        match self {
            PublishError::Handler { event, .. } => *event,
        }
    }

    /// Consumes the error and returns the listener's own failure.
    pub fn into_source(self) -> HandlerError {
        match self {
            PublishError::Handler { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed() -> PublishError {
        PublishError::Handler {
            event: "foo",
            listener: "h1".to_string(),
            position: 2,
            source: "disk full".into(),
        }
    }

    #[test]
    fn display_names_event_listener_and_cause() {
        let text = failed().to_string();
        assert!(text.contains("\"h1\""), "{text}");
        assert!(text.contains("\"foo\""), "{text}");
        assert!(text.contains("position 2"), "{text}");
        assert!(text.ends_with("disk full"), "{text}");
    }

    #[test]
    fn helpers_expose_label_message_and_source() {
        let err = failed();
        assert_eq!(err.as_label(), "publish_handler_failed");
        assert_eq!(err.as_message(), "event=foo listener=h1 error=disk full");
        assert_eq!(err.event(), "foo");
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.into_source().to_string(), "disk full");
    }
}
