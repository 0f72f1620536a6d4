use std::collections::HashMap;

/// Attribute key holding the value attached directly to the tag name, i.e. the `red` in `[color=red]`.
pub const STARTING_ATTR: &str = "starting";

/// A single scanned BBCode tag.
/// Borrows from the (already escaped) text being parsed, and is only produced by
/// [`BBParser::parse_tag`][crate::BBParser::parse_tag].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: &'a str,
    /// `true` for `[/name]`.
    pub closing: bool,
    /// Always empty for closing tags.
    pub attributes: HashMap<&'a str, &'a str>,
}
