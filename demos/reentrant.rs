//! # Reentrant Listeners Example
//!
//! Shows the snapshot rule: a listener that changes the registry while a
//! publish is running only affects the *next* publish.
//!
//! - `once` removes itself on first delivery
//! - `spawner` adds `late` during the first delivery
//! - `late` therefore starts receiving from the second publish on
//!
//! ## Run
//! ```bash
//! cargo run --example reentrant
//! ```

use std::sync::{Arc, OnceLock};

use evbus::{Listener, PublishError, Registry};

evbus::events! {
    Tick("tick"): u64;
}

fn main() -> Result<(), PublishError> {
    tracing_subscriber::fmt().init();

    let bus = Arc::new(Registry::new());

    let late = Listener::infallible("late", |n: &u64| println!("  late    <- tick {n}"));

    let spawner = {
        let bus = Arc::downgrade(&bus);
        let late = late.clone();
        Listener::infallible("spawner", move |n: &u64| {
            println!("  spawner <- tick {n}");
            if let Some(bus) = bus.upgrade() {
                bus.subscribe::<Tick>(&late);
            }
        })
    };

    // The slot hands `once` its own handle; the closure only keeps a weak ref to it.
    let once_slot: Arc<OnceLock<Listener<u64>>> = Arc::default();
    let once = {
        let bus = Arc::downgrade(&bus);
        let me = Arc::downgrade(&once_slot);
        once_slot
            .get_or_init(move || {
                Listener::infallible("once", move |n: &u64| {
                    println!("  once    <- tick {n}");
                    if let (Some(bus), Some(slot)) = (bus.upgrade(), me.upgrade()) {
                        if let Some(me) = slot.get() {
                            bus.unsubscribe::<Tick>(me);
                        }
                    }
                })
            })
            .clone()
    };

    bus.subscribe::<Tick>(&once);
    bus.subscribe::<Tick>(&spawner);

    for n in 1..=3 {
        println!("publish tick {n} ({} listeners)", bus.listener_count::<Tick>());
        bus.publish::<Tick>(&n)?;
    }

    Ok(())
}
