//! # Basic Example
//!
//! Walks through every registry operation with two events:
//! - `foo` carries a `String`
//! - `bar` carries a `u32`
//!
//! ## Run
//! ```bash
//! RUST_LOG=evbus=debug cargo run --example basic
//! ```

use evbus::{Listener, PublishError, Registry};
use tracing_subscriber::EnvFilter;

evbus::events! {
    Foo("foo"): String;
    Bar("bar"): u32;
}

fn printer(tag: &'static str) -> Listener<String> {
    Listener::infallible(tag, move |v: &String| println!("{tag} => {v}"))
}

fn main() -> Result<(), PublishError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bus = Registry::new();
    let hello = "hello".to_string();

    // Handler-scoped unsubscribe.
    let h1 = printer("handlerFoo1");
    bus.subscribe::<Foo>(&h1);
    bus.publish::<Foo>(&hello)?;
    bus.unsubscribe::<Foo>(&h1);
    bus.publish::<Foo>(&hello)?; // prints nothing

    // Event-scoped unsubscribe.
    bus.subscribe::<Foo>(&printer("handlerFoo2"));
    bus.subscribe::<Foo>(&printer("handlerFoo3"));
    bus.publish::<Foo>(&hello)?;
    bus.unsubscribe_all::<Foo>();
    bus.publish::<Foo>(&hello)?; // prints nothing

    // Clear everything.
    bus.subscribe::<Foo>(&printer("handlerFoo4"));
    bus.subscribe_fn::<Bar>("handlerBar1", |n| {
        println!("handlerBar1 => {n}");
        Ok(())
    });
    bus.publish::<Foo>(&hello)?;
    bus.publish::<Bar>(&123)?;
    bus.clear();
    bus.publish::<Foo>(&hello)?; // prints nothing
    bus.publish::<Bar>(&123)?; // prints nothing

    println!("events with listeners: {:?}", bus.event_names());
    Ok(())
}
