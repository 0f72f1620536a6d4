use std::{collections::HashMap, mem};

use bitflags::bitflags;

use crate::{
    escape::{Escaper, HtmlEscaper},
    handler::{Registry, TagHandler},
    Tag, STARTING_ATTR,
};

#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    pub feature_flags: ParserFeature,
}

bitflags! {
    /// Optional parsing behaviours, all off by default.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ParserFeature: u32 {
        /// Leave an opening tag with no matching close as text and keep going.
        /// Without this, parsing stops at the first unterminated tag and everything from it onwards is left as-is.
        const SKIP_UNTERMINATED = 1 << 0;

        /// All current and future feature flags.
        const ALL = u32::MAX;
    }
}

/// Location of a matching closing tag, relative to the text searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagEnd {
    /// Offset of the closing tag's `[`, which is where the contents end.
    pub content_end: usize,
    /// Offset of the closing tag's `]`.
    pub tag_end: usize,
}

/// Converts BBCode to HTML using the tag handlers in its [Registry].
#[doc(alias = "parser")]
pub struct BBParser<Esc = HtmlEscaper>
where
    Esc: Escaper,
{
    registry: Registry,
    config: ParserConfig,
    escaper: Esc,
}

impl BBParser {
    /// Construct a parser with no tags and no special strings.
    pub fn empty() -> Self {
        Self::with_registry(Registry::empty())
    }

    /// Construct a parser with the default tags and a `\n` to `<br>` rule.
    #[cfg(feature = "default_tags")]
    pub fn new() -> Self {
        Self::with_registry(Registry::with_defaults())
    }

    /// Construct a parser with the given registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self::custom(registry, Default::default(), HtmlEscaper)
    }
}

#[cfg(feature = "default_tags")]
impl Default for BBParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<Esc> BBParser<Esc>
where
    Esc: Escaper,
{
    /// Construct a parser with the given registry, config and escaper.
    pub fn custom(registry: Registry, config: ParserConfig, escaper: Esc) -> Self {
        Self {
            registry,
            config,
            escaper,
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Register `handler` for `name`, replacing any handler already registered for it.
    pub fn register<H>(&mut self, name: impl Into<String>, handler: H)
    where
        H: TagHandler + 'static,
    {
        self.registry.register(name, handler);
    }

    /// Register a literal replacement applied after all tags are converted.
    pub fn register_special_string(&mut self, old: impl Into<String>, new: impl Into<String>) {
        self.registry.register_special_string(old, new);
    }

    /// Convert the given BBCode to HTML.
    /// # Remarks
    /// The input is escaped first, then every registered tag with a matching close is replaced by its handler's output,
    /// and finally the special strings are replaced.
    /// Anything that isn't a registered, terminated tag is left as (escaped) text. This never fails.
    pub fn parse(&self, input: &str) -> String {
        tracing::trace!(len = input.len(), "Parsing BBCode");
        let escaped = self.escaper.escape(input);
        let out = self.render(&escaped);
        self.registry.apply_special_strings(out)
    }

    /// Parse the contents of a bracket pair (without the brackets).
    /// Returns [None] when `raw` is empty or names an opening tag with no registered handler.
    /// Closing tags are returned whatever their name.
    pub fn parse_tag<'a>(&self, raw: &'a str) -> Option<Tag<'a>> {
        if raw.is_empty() {
            return None;
        }

        if let Some(name) = raw.strip_prefix('/') {
            return Some(Tag {
                name,
                closing: true,
                attributes: HashMap::new(),
            });
        }

        let mut tokens = raw.split(' ');
        let mut starting = tokens.next().unwrap_or_default().split('=');
        let name = starting.next().unwrap_or_default();
        if !self.registry.contains(name) {
            return None;
        }

        let mut attributes = HashMap::new();
        if let Some(value) = starting.next() {
            attributes.insert(STARTING_ATTR, value);
        }

        for token in tokens.filter(|t| !t.is_empty()) {
            let mut pair = token.split('=');
            let key = pair.next().unwrap_or_default();
            attributes.insert(key, pair.next().unwrap_or_default());
        }

        Some(Tag {
            name,
            closing: false,
            attributes,
        })
    }

    /// Find the closing tag matching an already consumed `[name]`, skipping over nested `[name]...[/name]` pairs.
    /// Tags with other names are ignored entirely.
    pub fn find_end(&self, remainder: &str, name: &str) -> Option<TagEnd> {
        let mut depth = 0usize;
        let mut loc = 0;

        while let Some((open, close)) = next_bracket(remainder, loc) {
            loc = close + 1;

            let Some(tag) = self.parse_tag(&remainder[(open + 1)..close]) else {
                continue;
            };

            if tag.name != name {
                continue;
            }

            if !tag.closing {
                depth += 1;
            } else if depth == 0 {
                return Some(TagEnd {
                    content_end: open,
                    tag_end: close,
                });
            } else {
                depth -= 1;
            }
        }

        None
    }

    fn render(&self, text: &str) -> String {
        let mut frame = Frame {
            end: text.len(),
            loc: 0,
            out: String::with_capacity(text.len()),
        };
        let mut pending: Vec<Pending<'_, '_>> = Vec::new();

        loop {
            while let Some((open, close)) = next_bracket(&text[..frame.end], frame.loc) {
                frame.out.push_str(&text[frame.loc..open]);

                let tag = match self.parse_tag(&text[(open + 1)..close]) {
                    Some(tag) if !tag.closing => tag,
                    Some(_) => {
                        // Stray closing tag.
                        frame.out.push('[');
                        frame.loc = open + 1;
                        continue;
                    }
                    None => {
                        frame.out.push_str(&text[open..=close]);
                        frame.loc = close + 1;
                        continue;
                    }
                };

                let body = close + 1;
                let Some(end) = self.find_end(&text[body..frame.end], tag.name) else {
                    if self
                        .config
                        .feature_flags
                        .contains(ParserFeature::SKIP_UNTERMINATED)
                    {
                        tracing::debug!(tag = tag.name, at = open, "Skipping unterminated tag");
                        frame.out.push('[');
                        frame.loc = open + 1;
                        continue;
                    }

                    tracing::debug!(
                        tag = tag.name,
                        at = open,
                        "Unterminated tag, leaving the rest of the text as-is"
                    );
                    frame.loc = open;
                    break;
                };

                let Some(handler) = self.registry.get(tag.name) else {
                    unreachable!("parse_tag only accepts tags with a registered handler");
                };

                // Render the contents first, then come back to this frame after the closing tag.
                let contents = Frame {
                    end: body + end.content_end,
                    loc: body,
                    out: String::with_capacity(end.content_end),
                };
                pending.push(Pending {
                    parent: mem::replace(&mut frame, contents),
                    tag,
                    handler,
                    resume: body + end.tag_end + 1,
                });
            }

            frame.out.push_str(&text[frame.loc..frame.end]);

            let Some(Pending {
                mut parent,
                tag,
                handler,
                resume,
            }) = pending.pop()
            else {
                return frame.out;
            };

            tracing::trace!(tag = tag.name, depth = pending.len(), "Rendering tag");
            parent.out.push_str(&handler.render(&tag, &frame.out));
            parent.loc = resume;
            frame = parent;
        }
    }
}

/// A span of the escaped text being rendered.
struct Frame {
    end: usize,
    loc: usize,
    out: String,
}

/// A tag waiting on its contents to be rendered.
struct Pending<'t, 'r> {
    parent: Frame,
    tag: Tag<'t>,
    handler: &'r dyn TagHandler,
    /// Where the parent continues, just past the closing tag.
    resume: usize,
}

/// Locate the next `[` at or after `from`, and the first `]` after it.
fn next_bracket(text: &str, from: usize) -> Option<(usize, usize)> {
    let open = from + text[from..].find('[')?;
    let close = open + 1 + text[(open + 1)..].find(']')?;
    Some((open, close))
}
