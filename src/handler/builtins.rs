//! Built-in handlers for the commonly used BBCode tags.
use crate::{Tag, STARTING_ATTR};

use super::TagHandler;

/// Wraps the contents in an HTML element of the same name as the tag.
/// # Exact output
/// ```html
/// <name>contents</name>
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct SimpleTag;

impl TagHandler for SimpleTag {
    fn render(&self, tag: &Tag<'_>, content: &str) -> String {
        format!("<{0}>{1}</{0}>", tag.name, content)
    }
}

/// Aligns the contents using the tag name as the alignment, for `[left]`, `[center]` and `[right]`.
/// # Exact output
/// ```html
/// <div style="text-align:name;">contents</div>
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct TextAlignTag;

impl TagHandler for TextAlignTag {
    fn render(&self, tag: &Tag<'_>, content: &str) -> String {
        format!("<div style=\"text-align:{};\">{}</div>", tag.name, content)
    }
}

macro_rules! font_tag {
    ($doc:expr, $name:ident, $attr:literal) => {
        #[derive(Copy, Clone, Debug, Default)]
        #[doc = $doc]
        #[doc = "# Exact output"]
        #[doc = "```html"]
        #[doc = concat!("<font ", $attr, "=value>contents</font>")]
        #[doc = "```"]
        #[doc = "The attribute is left out (keeping the space) when the tag has no value."]
        pub struct $name;

        impl TagHandler for $name {
            fn render(&self, tag: &Tag<'_>, content: &str) -> String {
                let attr = tag
                    .attributes
                    .get(STARTING_ATTR)
                    .map(|v| format!(concat!($attr, "={}"), v))
                    .unwrap_or_default();
                format!("<font {}>{}</font>", attr, content)
            }
        }
    };
}

font_tag! {
    "Font color tag taking the color as its value, as in `[color=red]`.",
    FontColorTag, "color"
}
font_tag! {
    "Font size tag taking the size as its value, as in `[size=4]`.",
    FontSizeTag, "size"
}

/// Hyperlink tag. Links to its value (`[url=https://example.com]text[/url]`) or, without one, to its contents.
/// # Exact output
/// ```html
/// <a href="link">contents</a>
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct UrlTag;

impl TagHandler for UrlTag {
    fn render(&self, tag: &Tag<'_>, content: &str) -> String {
        let link = tag
            .attributes
            .get(STARTING_ATTR)
            .copied()
            .unwrap_or(content);
        format!("<a href=\"{}\">{}</a>", link, content)
    }
}

/// List tag, turning every line starting with `*` or `[*]` into a list item.
/// Other lines are kept (trimmed) as-is, and line breaks inside the list are dropped.
/// # Exact output
/// ```html
/// <name><li>first</li><li>second</li></name>
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct ListTag;

impl TagHandler for ListTag {
    fn render(&self, tag: &Tag<'_>, content: &str) -> String {
        let mut items = String::with_capacity(content.len());
        for line in content.split('\n') {
            let line = line.trim();
            if line.starts_with("[*]") || line.starts_with('*') {
                let item = line.strip_prefix("[*]").unwrap_or(line);
                let item = item.strip_prefix('*').unwrap_or(item);
                items.push_str("<li>");
                items.push_str(item);
                items.push_str("</li>");
            } else {
                items.push_str(line);
            }
        }
        format!("<{0}>{1}</{0}>", tag.name, items)
    }
}

macro_rules! tag_list {
    ($(($tag:ident, [$($name:expr),*])),* $(,)?) => {
        {
            let mut v: Vec<(&'static str, Box<dyn TagHandler>)> = vec![];
            $(
                $(
                    v.push(($name, Box::new($tag) as Box<dyn TagHandler>));
                )*
            )*

            v
        }
    };
}

/// Returns the default handler set, paired with the tag names each is registered under.
/// # Included tags
/// - `b`, `i`, `u`, `s`, `li`: [SimpleTag]
/// - `left`, `center`, `right`: [TextAlignTag]
/// - `color`: [FontColorTag]
/// - `size`: [FontSizeTag]
/// - `url`: [UrlTag]
/// - `list`, `ul`, `ol`: [ListTag]
pub fn default_handlers() -> Vec<(&'static str, Box<dyn TagHandler>)> {
    tag_list![
        (SimpleTag, ["b", "i", "u", "s", "li"]),
        (TextAlignTag, ["left", "center", "right"]),
        (FontColorTag, ["color"]),
        (FontSizeTag, ["size"]),
        (UrlTag, ["url"]),
        (ListTag, ["list", "ul", "ol"]),
    ]
}
