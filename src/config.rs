//! # Registry configuration.
//!
//! Provides [`RegistryConfig`], the settings a [`Registry`](crate::Registry)
//! is created with.
//!
//! ## Sentinel values
//! - `capacity = 0` → no pre-allocation (the event map grows on demand)

use std::borrow::Cow;

/// Configuration for a [`Registry`](crate::Registry).
///
/// ## Field semantics
/// - `label`: Name reported in the `registry` field of every log record
/// - `capacity`: Number of distinct events to pre-allocate room for (`0` = none)
///
/// ## Notes
/// All fields are public. The `with_*` helpers exist for call sites that
/// prefer chaining from [`RegistryConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Label used in structured log fields.
    ///
    /// Useful when a program owns several registries.
    pub label: Cow<'static, str>,

    /// Initial capacity of the event map.
    ///
    /// - `0` = allocate lazily
    /// - `n > 0` = room for `n` distinct events before rehashing
    pub capacity: usize,
}

impl RegistryConfig {
    /// Returns the config with `label` replaced.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    /// Returns the config with `capacity` replaced.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns the capacity as an `Option`.
    ///
    /// - `None` → no pre-allocation
    /// - `Some(n)` → pre-allocate room for `n` events
    #[inline]
    pub fn capacity_hint(&self) -> Option<usize> {
        if self.capacity == 0 {
            None
        } else {
            Some(self.capacity)
        }
    }
}

impl Default for RegistryConfig {
    /// Default configuration:
    ///
    /// - `label = "registry"`
    /// - `capacity = 0` (lazy)
    fn default() -> Self {
        Self {
            label: Cow::Borrowed("registry"),
            capacity: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lazy_and_labelled() {
        let cfg = RegistryConfig::default();
        assert_eq!(cfg.label, "registry");
        assert_eq!(cfg.capacity_hint(), None);
    }

    #[test]
    fn builders_replace_fields() {
        let cfg = RegistryConfig::default()
            .with_label(format!("ui-{}", 2))
            .with_capacity(16);
        assert_eq!(cfg.label, "ui-2");
        assert_eq!(cfg.capacity_hint(), Some(16));
    }
}
