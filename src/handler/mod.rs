//! Tag handlers and the registry mapping tag names to them.
use std::collections::HashMap;

use static_assertions::assert_obj_safe;

use crate::Tag;

/// The primary trait for converting a BBCode tag and its contents to HTML.
pub trait TagHandler: Send + Sync {
    /// Produce the HTML replacing the whole `[tag]content[/tag]` span.
    /// # Remarks
    /// `content` is escaped and has any nested tags already rendered.
    /// An implementation MUST always return the same output for the same input.
    fn render(&self, tag: &Tag<'_>, content: &str) -> String;
}

assert_obj_safe!(TagHandler);

impl<F> TagHandler for F
where
    F: Fn(&Tag<'_>, &str) -> String + Send + Sync,
{
    fn render(&self, tag: &Tag<'_>, content: &str) -> String {
        self(tag, content)
    }
}

/// Tag handlers keyed by (case-sensitive) tag name, plus the literal replacements applied once parsing is done.
#[derive(Default)]
pub struct Registry {
    handlers: HashMap<String, Box<dyn TagHandler>>,
    special_strings: Vec<(String, String)>,
}

impl Registry {
    /// Construct a registry with no handlers and no special strings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Construct a registry holding [`builtins::default_handlers`] and a `\n` to `<br>` rule.
    #[cfg(feature = "default_tags")]
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for (name, handler) in builtins::default_handlers() {
            registry.handlers.insert(name.to_owned(), handler);
        }
        registry.register_special_string("\n", "<br>");
        registry
    }

    /// Register `handler` for `name`, replacing any handler already registered for it.
    pub fn register<H>(&mut self, name: impl Into<String>, handler: H)
    where
        H: TagHandler + 'static,
    {
        let name = name.into();
        if self.handlers.contains_key(&name) {
            tracing::debug!(tag = %name, "Replacing existing tag handler");
        } else {
            tracing::trace!(tag = %name, "Registering tag handler");
        }
        self.handlers.insert(name, Box::new(handler));
    }

    /// Register a literal replacement, overriding any existing rule for `old`.
    pub fn register_special_string(&mut self, old: impl Into<String>, new: impl Into<String>) {
        let (old, new) = (old.into(), new.into());
        if let Some(rule) = self.special_strings.iter_mut().find(|(k, _)| *k == old) {
            tracing::debug!(old = ?old, "Replaced existing special string rule");
            rule.1 = new;
            return;
        }

        self.special_strings.push((old, new));
    }

    pub fn get(&self, name: &str) -> Option<&dyn TagHandler> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Special string rules, in registration order.
    pub fn special_strings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.special_strings
            .iter()
            .map(|(old, new)| (old.as_str(), new.as_str()))
    }

    /// Replace every occurrence of each special string, one rule at a time in registration order.
    pub fn apply_special_strings(&self, mut text: String) -> String {
        for (old, new) in self.special_strings() {
            if old.is_empty() || !text.contains(old) {
                continue;
            }
            text = text.replace(old, new);
        }
        text
    }
}

#[cfg(feature = "default_tags")]
pub mod builtins;
