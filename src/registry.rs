//! Operator dispatch table.
//!
//! The original design looked up handler classes by fully-qualified name
//! from a properties file at runtime (reflection-style dynamic class
//! loading). This is re-architected as a static registry (spec §9): a
//! mapping from operator mnemonic to a handler value, where the handler
//! is a plain function pointer resolved against a compile-time table — no
//! runtime reflection.

use std::collections::HashMap;

use crate::engine::Engine;
use crate::error::{PdfError, Result};
use crate::object::Operand;
use crate::sink::TextPositionSink;

/// A built-in operator handler: reads operands and calls back into the
/// Engine to mutate state and/or invoke `show_encoded_text`.
pub type HandlerFn<S> = fn(&mut Engine<S>, &[u8], &[Operand]) -> Result<()>;

enum Slot<S: TextPositionSink> {
    Handler(HandlerFn<S>),
    /// Recorded via `disable`: silently ignored, never logged as
    /// unsupported.
    Disabled,
}

/// Mapping from operator mnemonic to handler, plus the disabled set
/// (spec §4.1).
pub struct OperatorRegistry<S: TextPositionSink> {
    slots: HashMap<Vec<u8>, Slot<S>>,
}

impl<S: TextPositionSink> OperatorRegistry<S> {
    pub fn new() -> Self {
        OperatorRegistry {
            slots: HashMap::new(),
        }
    }

    /// Bind `handler` to `mnemonic`, overriding any previous binding.
    pub fn register(&mut self, mnemonic: impl Into<Vec<u8>>, handler: HandlerFn<S>) {
        self.slots.insert(mnemonic.into(), Slot::Handler(handler));
    }

    /// Record `mnemonic` as silently-ignored.
    pub fn disable(&mut self, mnemonic: impl Into<Vec<u8>>) {
        self.slots.insert(mnemonic.into(), Slot::Disabled);
    }

    /// `None` means "unknown to this registry" (the unsupported-set path);
    /// `Some(None)` means explicitly disabled; `Some(Some(handler))` is a
    /// live binding.
    pub fn lookup(&self, mnemonic: &[u8]) -> Option<Option<HandlerFn<S>>> {
        match self.slots.get(mnemonic)? {
            Slot::Handler(h) => Some(Some(*h)),
            Slot::Disabled => Some(None),
        }
    }

    /// The full set of built-in operators, wired to this crate's handlers
    /// (spec §4.1, enumerating the mnemonics named there plus the
    /// supplemented marked-content/path/colour no-ops of `SPEC_FULL.md`
    /// §B).
    pub fn with_defaults() -> Self {
        let mut reg = OperatorRegistry::new();
        crate::ops::register_defaults(&mut reg);
        reg
    }

    /// Build a registry from a `{mnemonic: handler-identifier | ""}`
    /// configuration (spec §6), resolving each identifier against the
    /// compile-time handler table. An identifier absent from the table is
    /// a construction-time fatal error.
    pub fn from_config(config: &HashMap<String, Option<String>>) -> Result<Self> {
        let mut reg = OperatorRegistry::new();
        for (mnemonic, identifier) in config {
            match identifier {
                None => reg.disable(mnemonic.as_bytes().to_vec()),
                Some(id) => {
                    let handler = crate::ops::handler_by_identifier::<S>(id)
                        .ok_or_else(|| PdfError::UnknownHandlerIdentifier(id.clone()))?;
                    reg.register(mnemonic.as_bytes().to_vec(), handler);
                }
            }
        }
        Ok(reg)
    }
}

impl<S: TextPositionSink> Default for OperatorRegistry<S> {
    fn default() -> Self {
        OperatorRegistry::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CollectingSink;

    #[test]
    fn unknown_mnemonic_is_none() {
        let reg: OperatorRegistry<CollectingSink> = OperatorRegistry::with_defaults();
        assert!(reg.lookup(b"Foo").is_none());
    }

    #[test]
    fn known_builtin_is_some_some() {
        let reg: OperatorRegistry<CollectingSink> = OperatorRegistry::with_defaults();
        assert!(matches!(reg.lookup(b"Tj"), Some(Some(_))));
    }

    #[test]
    fn disabled_mnemonic_is_some_none() {
        let mut config = HashMap::new();
        config.insert("Tj".to_string(), None);
        let reg: OperatorRegistry<CollectingSink> = OperatorRegistry::from_config(&config).unwrap();
        assert!(matches!(reg.lookup(b"Tj"), Some(None)));
    }

    #[test]
    fn unresolvable_identifier_is_construction_time_fatal() {
        let mut config = HashMap::new();
        config.insert("Tj".to_string(), Some("NoSuchHandler".to_string()));
        let result: Result<OperatorRegistry<CollectingSink>> = OperatorRegistry::from_config(&config);
        assert!(matches!(result, Err(PdfError::UnknownHandlerIdentifier(_))));
    }
}
