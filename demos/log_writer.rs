//! # LogWriter Example
//!
//! Attaches the built-in [`LogWriter`](evbus::LogWriter) to two events and
//! publishes a few payloads. Every payload shows up as an `INFO` record.
//!
//! ## Run
//! ```bash
//! cargo run --example log_writer --features logging
//! ```

use evbus::{Listener, LogWriter, PublishError, Registry, RegistryConfig};

evbus::events! {
    Login("login"): String;
    Retry("retry"): u32;
}

fn main() -> Result<(), PublishError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let bus = Registry::with_config(RegistryConfig::default().with_label("demo"));

    bus.subscribe::<Login>(&Listener::new(LogWriter::<Login>::new()));
    bus.subscribe::<Retry>(&Listener::new(LogWriter::<Retry>::new()));

    bus.publish::<Login>(&"alice".to_string())?;
    bus.publish::<Retry>(&3)?;
    bus.publish::<Login>(&"bob".to_string())?;

    Ok(())
}
