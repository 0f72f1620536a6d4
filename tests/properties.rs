//! Property-based tests for BBCode to HTML conversion.
//!
//! These check the conversion as a whole against the default tag set:
//! - text without brackets only goes through escaping and special strings
//! - properly nested documents leave no tag syntax behind
//! - arbitrary input never panics, whatever the unterminated tag policy
#![cfg(feature = "default_tags")]

use bbhtml::{BBParser, Escaper, HtmlEscaper, ParserConfig, ParserFeature};
use proptest::prelude::*;

/// Generate a properly nested document, paired with the HTML it should convert to.
fn document_strategy() -> impl Strategy<Value = (String, String)> {
    let leaf = "[a-z \n]{0,8}".prop_map(|s| {
        let html = s.replace('\n', "<br>");
        (s, html)
    });

    leaf.prop_recursive(12, 64, 4, |inner| {
        prop_oneof![
            (prop::sample::select(vec!["b", "i", "u", "s"]), inner.clone()).prop_map(
                |(name, (bb, html))| {
                    (
                        format!("[{0}]{1}[/{0}]", name, bb),
                        format!("<{0}>{1}</{0}>", name, html),
                    )
                }
            ),
            prop::collection::vec(inner, 1..4).prop_map(|parts| {
                parts
                    .into_iter()
                    .fold((String::new(), String::new()), |(mut bb, mut html), (b, h)| {
                        bb.push_str(&b);
                        html.push_str(&h);
                        (bb, html)
                    })
            }),
        ]
    })
}

/// Generate text heavy in tag syntax, including broken tags.
fn noisy_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[\\[\\]/a-z= \n<&]{0,40}",
        "(\\[/?(b|i|url|list|color)(=[a-z]{0,3})?\\]|[a-z\\*\n ]{0,3}){0,12}",
        "\\PC{0,30}",
    ]
}

proptest! {
    #[test]
    fn text_without_brackets_is_only_escaped(input in "[^\\[]{0,60}") {
        let parser = BBParser::new();
        let expected = HtmlEscaper.escape(&input).replace('\n', "<br>");
        prop_assert_eq!(parser.parse(&input), expected);
    }

    #[test]
    fn nested_documents_convert_fully((bb, html) in document_strategy()) {
        let parser = BBParser::new();
        let out = parser.parse(&bb);
        prop_assert!(!out.contains('[') && !out.contains(']'));
        prop_assert_eq!(out, html);
    }

    #[test]
    fn skipping_matches_on_well_formed_input((bb, html) in document_strategy()) {
        let parser = BBParser::new().with_config(ParserConfig {
            feature_flags: ParserFeature::SKIP_UNTERMINATED,
        });
        prop_assert_eq!(parser.parse(&bb), html);
    }

    #[test]
    fn never_panics(input in noisy_strategy()) {
        let parser = BBParser::new();
        let _ = parser.parse(&input);

        let parser = BBParser::new().with_config(ParserConfig {
            feature_flags: ParserFeature::ALL,
        });
        let _ = parser.parse(&input);
    }

    #[test]
    fn parsing_is_deterministic(input in noisy_strategy()) {
        let parser = BBParser::new();
        prop_assert_eq!(parser.parse(&input), parser.parse(&input));
    }
}
