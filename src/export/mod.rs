//! Export module for writing gamebooks to their two document formats.
//!
//! # Architecture
//!
//! The `Exporter` trait uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write` destination
//!
//! # Example
//!
//! ```no_run
//! use gamebook::Book;
//! use gamebook::export::{Exporter, HtmlConfig, HtmlExporter, ScriptSource};
//! use std::fs::File;
//!
//! let book = Book::open("story.xml")?;
//! let mut file = File::create("story.html")?;
//!
//! let config = HtmlConfig::new().with_script(ScriptSource::File("reveal.js".into()));
//! HtmlExporter::new().with_config(config).export(&book, &mut file)?;
//! # Ok::<(), gamebook::Error>(())
//! ```

use std::io::Write;

use crate::error::Result;
use crate::markup::Format;
use crate::model::Book;

mod html;
mod xml;

pub use html::{BUNDLED_SCRIPT, HtmlConfig, HtmlExporter, ScriptSource};
pub use xml::XmlExporter;

/// Trait for exporting books to a specific document format.
///
/// The writer can be:
/// - `std::fs::File` for disk output
/// - `Vec<u8>` for in-memory output
/// - `std::io::Stdout` or any other type implementing `Write`
pub trait Exporter {
    /// The document format this exporter produces.
    const FORMAT: Format;

    /// Export the book to the provided writer.
    fn export<W: Write>(&self, book: &Book, writer: &mut W) -> Result<()>;
}
