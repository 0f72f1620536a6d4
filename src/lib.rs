//! BBCode to HTML conversion, driven by a registry of tag handlers.
//!
//! ```
//! let parser = bbhtml::BBParser::new();
//! assert_eq!(parser.parse("[b]hi[/b]"), "<b>hi</b>");
//! ```

mod escape;
mod handler;
mod parser;
mod tag;

pub use escape::{Escaper, HtmlEscaper};
pub use handler::{Registry, TagHandler};
pub use parser::{BBParser, ParserConfig, ParserFeature, TagEnd};
pub use tag::{Tag, STARTING_ATTR};

#[cfg(feature = "default_tags")]
pub use handler::builtins;
