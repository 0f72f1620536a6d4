//! Converts BBCode read from stdin (or the built-in samples, if stdin is empty) to HTML.
//!
//! Run with `RUST_LOG=bbhtml=trace` to see every tag as it is rendered.

use std::io::Read;

use bbhtml::{BBParser, Tag};
use tracing_subscriber::EnvFilter;

const SAMPLES: &[&str] = &[
    "[b]Bold[/b], [i]italic[/i] and [u][s]both[/s][/u].",
    "[color=red]Red[/color] text at [size=5]size 5[/size].",
    "[center]Centered[/center]",
    "[url=https://example.com]A link[/url] and [url]https://example.com[/url]",
    "[list]\n[*]First\n[*]Second\n[/list]",
    "[spoiler]Hidden[/spoiler]",
    "[b]Never closed",
];

fn spoiler(_: &Tag<'_>, content: &str) -> String {
    format!("<details><summary>Spoiler</summary>{}</details>", content)
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut parser = BBParser::new();
    parser.register("spoiler", spoiler);

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    if input.trim().is_empty() {
        for sample in SAMPLES {
            println!("{}", parser.parse(sample));
        }
    } else {
        println!("{}", parser.parse(&input));
    }

    Ok(())
}
