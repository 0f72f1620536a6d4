//! Escaping applied to raw input before any tag is scanned.
use std::borrow::Cow;

use static_assertions::assert_obj_safe;

/// Converts raw user text into text safe to embed in HTML.
/// # Remarks
/// Implementations MUST leave `[`, `]`, `/`, `=` and spaces untouched, otherwise tag syntax will no longer be recognized.
pub trait Escaper {
    fn escape<'a>(&self, input: &'a str) -> Cow<'a, str>;
}

assert_obj_safe!(Escaper);

/// The default escaper, encoding `&`, `<`, `>`, `"` and `'`.
#[derive(Copy, Clone, Debug, Default)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn escape<'a>(&self, input: &'a str) -> Cow<'a, str> {
        html_escape::encode_quoted_attribute(input)
    }
}
