//! End-to-end walk through subscribe / publish / the three unsubscribe shapes.

use std::sync::{Arc, Mutex};

use evbus::{Listener, Registry};

evbus::events! {
    Foo("foo"): String;
    Bar("bar"): u32;
}

type Calls = Arc<Mutex<Vec<String>>>;

fn listener<P: std::fmt::Display + 'static>(calls: &Calls, tag: &'static str) -> Listener<P> {
    let calls = Arc::clone(calls);
    Listener::infallible(tag, move |v: &P| {
        calls.lock().unwrap().push(format!("{tag}({v})"));
    })
}

/// Returns the calls recorded since the previous drain.
fn drain(calls: &Calls) -> Vec<String> {
    std::mem::take(&mut *calls.lock().unwrap())
}

#[test]
fn foo_bar_walkthrough() {
    let bus = Registry::new();
    let calls: Calls = Arc::default();
    let hello = || "hello".to_string();

    // 1. one handler, one delivery
    let h1 = listener::<String>(&calls, "h1");
    bus.subscribe::<Foo>(&h1);
    bus.publish::<Foo>(&hello()).unwrap();
    assert_eq!(drain(&calls), ["h1(hello)"]);

    // 2. handler-scoped unsubscribe
    bus.unsubscribe::<Foo>(&h1);
    bus.publish::<Foo>(&hello()).unwrap();
    assert!(drain(&calls).is_empty());

    // 3. two handlers, registration order
    bus.subscribe::<Foo>(&listener(&calls, "h2"));
    bus.subscribe::<Foo>(&listener(&calls, "h3"));
    bus.publish::<Foo>(&hello()).unwrap();
    assert_eq!(drain(&calls), ["h2(hello)", "h3(hello)"]);

    // 4. event-scoped unsubscribe
    bus.unsubscribe_all::<Foo>();
    bus.publish::<Foo>(&hello()).unwrap();
    assert!(drain(&calls).is_empty());

    // 5. two events, independent payload types
    bus.subscribe::<Foo>(&listener(&calls, "h4"));
    bus.subscribe::<Bar>(&listener(&calls, "h5"));
    bus.publish::<Foo>(&hello()).unwrap();
    bus.publish::<Bar>(&123).unwrap();
    assert_eq!(drain(&calls), ["h4(hello)", "h5(123)"]);

    // 6. clear everything
    bus.clear();
    bus.publish::<Foo>(&hello()).unwrap();
    bus.publish::<Bar>(&123).unwrap();
    assert!(drain(&calls).is_empty());
    assert!(bus.is_empty());
}

#[test]
fn snapshot_isolates_running_fan_out_from_reentrant_changes() {
    let bus = Arc::new(Registry::new());
    let calls: Calls = Arc::default();

    let h2 = listener::<String>(&calls, "h2");
    let h3 = listener::<String>(&calls, "h3");
    let h1 = {
        let bus = Arc::downgrade(&bus);
        let (h2, h3) = (h2.clone(), h3.clone());
        let calls = Arc::clone(&calls);
        Listener::infallible("h1", move |v: &String| {
            calls.lock().unwrap().push(format!("h1({v})"));
            if let Some(bus) = bus.upgrade() {
                bus.unsubscribe::<Foo>(&h2);
                bus.subscribe::<Foo>(&h3);
            }
        })
    };
    bus.subscribe::<Foo>(&h1);
    bus.subscribe::<Foo>(&h2);

    bus.publish::<Foo>(&"a".to_string()).unwrap();
    assert_eq!(drain(&calls), ["h1(a)", "h2(a)"]);

    bus.publish::<Foo>(&"b".to_string()).unwrap();
    assert_eq!(drain(&calls), ["h1(b)", "h3(b)"]);
}

#[test]
fn failing_handler_stops_fan_out_and_reaches_publisher() {
    let bus = Registry::new();
    let calls: Calls = Arc::default();

    bus.subscribe::<Bar>(&listener(&calls, "before"));
    bus.subscribe_fn::<Bar>("gate", |n| match n {
        0 => Err("zero is not allowed".into()),
        _ => Ok(()),
    });
    bus.subscribe::<Bar>(&listener(&calls, "after"));

    let err = bus.publish::<Bar>(&0).unwrap_err();
    assert_eq!(err.as_label(), "publish_handler_failed");
    assert!(err.to_string().contains("zero is not allowed"));
    assert_eq!(drain(&calls), ["before(0)"]);

    bus.publish::<Bar>(&1).unwrap();
    assert_eq!(drain(&calls), ["before(1)", "after(1)"]);
}
