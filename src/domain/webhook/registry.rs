//! Event registry: the fixed lookup table from event type string to decoder.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::events::{DecodeFn, EventKind};

static DEFAULT_REGISTRY: Lazy<EventRegistry> = Lazy::new(|| {
    EventKind::ALL
        .into_iter()
        .fold(EventRegistry::builder(), |builder, kind| {
            builder.register(kind.as_str(), kind.decoder())
        })
        .build()
});

/// Result of looking up an event type.
#[derive(Debug, Clone, Copy)]
pub enum Lookup {
    /// A decoder is bound to the type.
    Decoder(DecodeFn),
    /// The type is registered but has no decoder bound.
    Unbound,
    /// The type is not registered.
    Unknown,
}

/// Immutable mapping from event type string to decoder.
///
/// Built once and read concurrently; no mutation is exposed after `build`.
#[derive(Debug, Clone)]
pub struct EventRegistry {
    entries: HashMap<String, Option<DecodeFn>>,
}

impl EventRegistry {
    pub fn builder() -> EventRegistryBuilder {
        EventRegistryBuilder::default()
    }

    /// The process-wide registry holding every known ONVO event kind.
    pub fn standard() -> &'static EventRegistry {
        &DEFAULT_REGISTRY
    }

    pub fn lookup(&self, event_type: &str) -> Lookup {
        match self.entries.get(event_type) {
            Some(Some(decoder)) => Lookup::Decoder(*decoder),
            Some(None) => Lookup::Unbound,
            None => Lookup::Unknown,
        }
    }

    pub fn contains(&self, event_type: &str) -> bool {
        self.entries.contains_key(event_type)
    }

    /// Registered type strings, sorted.
    pub fn event_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        DEFAULT_REGISTRY.clone()
    }
}

/// Builder for custom registries.
#[derive(Debug, Default)]
pub struct EventRegistryBuilder {
    entries: HashMap<String, Option<DecodeFn>>,
}

impl EventRegistryBuilder {
    /// Binds a decoder to an event type, replacing any earlier binding.
    pub fn register(mut self, event_type: impl Into<String>, decoder: DecodeFn) -> Self {
        self.entries.insert(event_type.into(), Some(decoder));
        self
    }

    /// Declares a recognised event type with no decoder bound yet.
    pub fn reserve(mut self, event_type: impl Into<String>) -> Self {
        self.entries.entry(event_type.into()).or_insert(None);
        self
    }

    /// Starts from the standard ONVO event kinds.
    pub fn with_standard_events(mut self) -> Self {
        for kind in EventKind::ALL {
            self.entries
                .insert(kind.as_str().to_string(), Some(kind.decoder()));
        }
        self
    }

    pub fn build(self) -> EventRegistry {
        EventRegistry {
            entries: self.entries,
        }
    }
}
