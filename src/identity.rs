//! Identity, tagging and disposal primitives shared by vertices, edges and graphs

use std::borrow::Cow;
use std::fmt;
use uuid::Uuid;

/// Something that may carry a string identifier
pub trait Identifiable {
    /// The identifier, if one is assigned
    fn id(&self) -> Option<&str>;

    /// Whether an identifier is assigned
    fn has_id(&self) -> bool {
        self.id().is_some()
    }
}

/// Something that may carry a human-readable tag
///
/// A tag overrides the identifier in display form.
pub trait Tagged {
    fn tag(&self) -> Option<&str>;

    fn set_tag(&mut self, tag: Option<String>);

    /// Display form: the tag when present, otherwise the fallback
    fn tag_or<'a>(&'a self, fallback: &'a str) -> Cow<'a, str> {
        match self.tag() {
            Some(tag) => Cow::Borrowed(tag),
            None => Cow::Borrowed(fallback),
        }
    }
}

/// Release of an attached payload
///
/// Disposal is idempotent and never touches identity.
pub trait Disposable {
    fn dispose(&mut self);
}

/// Source of fresh vertex identifiers
///
/// Injected into engines so tests can swap random ids for predictable ones.
pub trait IdGenerator: fmt::Debug {
    /// Produce the next identifier; never repeats within one generator
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Counter-based identifiers: `<prefix>0`, `<prefix>1`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
