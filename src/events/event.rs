//! # Event schema: names and payload types.
//!
//! An event is declared as a marker type implementing [`Event`]. The marker
//! fixes two things at compile time:
//! - [`Event::NAME`]: the human-readable name (logs, introspection, errors);
//! - [`Event::Payload`]: the only payload type listeners of this event accept.
//!
//! The set of marker types a program declares is its event universe. The
//! registry keys its handler sets by marker type, so two markers are two
//! different events even when they share a `NAME`.
//!
//! ## Example
//! ```rust
//! use evbus::Event;
//!
//! struct Foo;
//!
//! impl Event for Foo {
//!     const NAME: &'static str = "foo";
//!     type Payload = String;
//! }
//!
//! assert_eq!(Foo::NAME, "foo");
//! ```
//!
//! The [`events!`](crate::events!) macro writes the same thing for several events at once.

/// # Declared event: a name bound to a payload type.
///
/// Implemented by zero-sized marker types. Handlers registered for `E`
/// receive `&E::Payload`; publishing `E` with any other type does not compile.
pub trait Event: 'static {
    /// Stable, human-readable event name.
    const NAME: &'static str;

    /// Payload handed (by reference) to every listener of this event.
    type Payload: 'static;
}

/// Declares one or more [`Event`] marker types.
///
/// Each entry reads `vis Marker("name"): PayloadType;` and expands to a unit
/// struct plus its [`Event`] implementation.
///
/// # Example
/// ```rust
/// use evbus::Event;
///
/// evbus::events! {
///     /// Greeting text.
///     pub Foo("foo"): String;
///     pub Bar("bar"): u32;
/// }
///
/// assert_eq!(Foo::NAME, "foo");
/// assert_eq!(<Bar as Event>::NAME, "bar");
/// ```
#[macro_export]
macro_rules! events {
    ($( $(#[$meta:meta])* $vis:vis $marker:ident ($name:literal) : $payload:ty ; )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct $marker;

            impl $crate::Event for $marker {
                const NAME: &'static str = $name;
                type Payload = $payload;
            }
        )*
    };
}
