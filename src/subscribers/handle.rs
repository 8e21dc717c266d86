//! # Core handler trait
//!
//! [`Handle`] is the extension point for reacting to events. The registry calls
//! [`Handle::handle`] synchronously, on the publisher's thread, once per publish.
//!
//! ## Contract
//! - Handlers receive the payload by reference and must not assume they are
//!   the only listener.
//! - Returning `Err` stops the current fan-out; the error reaches the publisher
//!   wrapped in [`PublishError`](crate::PublishError).
//! - Handlers may call back into the registry (subscribe, unsubscribe,
//!   publish). Changes apply from the next publish on.
//!
//! ## Example
//! ```rust
//! use evbus::{Handle, HandlerResult};
//!
//! struct Audit;
//!
//! impl Handle<String> for Audit {
//!     fn handle(&self, payload: &String) -> HandlerResult {
//!         if payload.is_empty() {
//!             return Err("empty payload".into());
//!         }
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "audit"
//!     }
//! }
//!
//! assert!(Audit.handle(&"x".to_string()).is_ok());
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::error::HandlerResult;

/// Contract for event handlers.
///
/// `P` is the payload type of the event the handler is registered for.
pub trait Handle<P>: Send + Sync + 'static {
    /// Handle a single payload.
    ///
    /// # Parameters
    /// - `payload`: Reference to the published value (does not transfer ownership)
    fn handle(&self, payload: &P) -> HandlerResult;

    /// Human-readable name (for logs and errors).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Function-backed handler.
///
/// Wraps a closure `F: Fn(&P) -> HandlerResult` together with a name.
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFn").field("name", &self.name).finish()
    }
}

/// Plain closures are handlers too; their name is the closure's type name.
impl<P, F> Handle<P> for F
where
    P: 'static,
    F: Fn(&P) -> HandlerResult + Send + Sync + 'static,
{
    fn handle(&self, payload: &P) -> HandlerResult {
        self(payload)
    }
}

impl<P, F> Handle<P> for HandlerFn<F>
where
    P: 'static,
    F: Fn(&P) -> HandlerResult + Send + Sync + 'static,
{
    fn handle(&self, payload: &P) -> HandlerResult {
        (self.f)(payload)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quiet;

    impl Handle<u32> for Quiet {
        fn handle(&self, _payload: &u32) -> HandlerResult {
            Ok(())
        }
    }

    #[test]
    fn default_name_is_type_name() {
        assert!(Handle::<u32>::name(&Quiet).ends_with("Quiet"));
    }

    #[test]
    fn handler_fn_forwards_payload_and_name() {
        let h = HandlerFn::new("even-only", |v: &u32| -> HandlerResult {
            if v % 2 == 0 {
                Ok(())
            } else {
                Err(format!("odd value {v}").into())
            }
        });
        assert_eq!(Handle::<u32>::name(&h), "even-only");
        assert!(Handle::<u32>::handle(&h, &4).is_ok());
        let err = Handle::<u32>::handle(&h, &3).unwrap_err();
        assert_eq!(err.to_string(), "odd value 3");
        assert_eq!(format!("{h:?}"), "HandlerFn { name: \"even-only\" }");
    }

    #[test]
    fn bare_closure_is_a_handler() {
        let h = |v: &u32| -> HandlerResult {
            if *v > 0 {
                Ok(())
            } else {
                Err("zero".into())
            }
        };
        assert!(Handle::<u32>::handle(&h, &1).is_ok());
        assert_eq!(Handle::<u32>::handle(&h, &0).unwrap_err().to_string(), "zero");
        assert!(Handle::<u32>::name(&h).contains("closure"));
    }
}
