//! The book aggregate.
//!
//! A `Book` owns its chapters in reading order. It loads from and saves to
//! the structured document and exports the presentational page.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::export::{Exporter, HtmlConfig, HtmlExporter, XmlExporter};
use crate::import;
use crate::markup::{Element, Format};

use super::{Chapter, ToMarkup};

/// A complete gamebook: a title and its chapters in authored order.
///
/// Chapter order is reading order in both output formats, but navigation is
/// driven by action targets, not by position.
///
/// # Example
///
/// ```no_run
/// use gamebook::{Action, Book, Chapter, End};
///
/// let book = Book::new(
///     "The Cellar",
///     vec![
///         Chapter::new(1, "A trapdoor creaks open.")
///             .with_action(Action::new("Climb down", 2)),
///         Chapter::new(2, "You found the treasure!").with_end(End::Win),
///     ],
/// );
///
/// book.save("cellar.xml")?;
/// book.export("cellar.html")?;
///
/// let reloaded = gamebook::Book::open("cellar.xml")?;
/// assert_eq!(reloaded, book);
/// # Ok::<(), gamebook::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub chapters: Vec<Chapter>,
}

impl Book {
    pub fn new(title: impl Into<String>, chapters: Vec<Chapter>) -> Self {
        Self {
            title: title.into(),
            chapters,
        }
    }

    /// Read a book from a structured document on disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut book = Self::default();
        book.load(path)?;
        Ok(book)
    }

    /// Replace this book's title and chapters with the ones stored at `path`.
    ///
    /// On error the book is left untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        *self = import::read_book(path)?;
        debug!(
            path = %path.display(),
            title = %self.title,
            chapters = self.chapters.len(),
            "loaded book"
        );
        Ok(())
    }

    /// Parse a structured document held in memory.
    pub fn from_xml(content: &str) -> Result<Self> {
        import::parse_book(content)
    }

    /// Write the structured document to `path`, replacing any existing file.
    ///
    /// Text holding control characters other than tab, newline and carriage
    /// return is refused with [`Error::InvalidCharacter`]; no file is written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_to_path(self, &XmlExporter::new(), path.as_ref())
    }

    /// Write the presentational document to `path` using the bundled
    /// interactivity script.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.export_with(path, &HtmlConfig::default())
    }

    /// Write the presentational document to `path` with an explicit config.
    pub fn export_with<P: AsRef<Path>>(&self, path: P, config: &HtmlConfig) -> Result<()> {
        let exporter = HtmlExporter::new().with_config(config.clone());
        write_to_path(self, &exporter, path.as_ref())
    }

    /// The chapter shown first when the presentational document opens.
    pub fn first_chapter(&self) -> Option<&Chapter> {
        self.chapters.first()
    }

    /// Look up a chapter by id. With duplicate ids the first one wins.
    pub fn chapter(&self, id: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// Lower the book to its structured document tree.
    pub fn to_structured(&self) -> Element {
        let mut book = Element::new("book")
            .with_attr("title", self.title.as_str())
            .with_child(Element::new("h1").with_text(self.title.as_str()));
        for chapter in &self.chapters {
            book.push(chapter.to_structured());
        }
        book
    }

    /// Lower the book to a full presentational document tree.
    ///
    /// `script` is the interactivity source; a `reveal(<id>)` call for the
    /// first chapter in sequence is appended to it, on a new line when the
    /// source does not already end with one. Fails with
    /// [`Error::EmptyBook`] when there are no chapters to reveal.
    pub fn to_presentational(&self, script: &str) -> Result<Element> {
        let first = self.first_chapter().ok_or(Error::EmptyBook)?;

        let mut content = Element::new("div")
            .with_attr("title", self.title.as_str())
            .with_child(Element::new("h1").with_text(self.title.as_str()))
            .with_child(Element::new("hr"));
        for chapter in &self.chapters {
            content.push(chapter.to_presentational());
        }

        let mut source = String::from(script);
        if !source.is_empty() && !source.ends_with('\n') {
            source.push('\n');
        }
        source.push_str(&format!("reveal({});", first.id));

        let head = Element::new("head")
            .with_child(Element::new("meta").with_attr("charset", "utf-8"))
            .with_child(Element::new("title").with_text(self.title.as_str()));
        let body = Element::new("body").with_child(content).with_child(
            Element::new("script")
                .with_attr("type", "text/javascript")
                .with_text(source),
        );

        Ok(Element::new("html").with_child(head).with_child(body))
    }

    /// The structured document as text, XML declaration included.
    ///
    /// Characters are not checked here; [`Book::save`] refuses text that a
    /// parser would reject.
    pub fn to_xml_string(&self) -> String {
        self.to_structured().to_document(Format::Structured)
    }

    /// The presentational document as text, doctype included.
    pub fn to_html_string(&self, config: &HtmlConfig) -> Result<String> {
        let script = config.script.load()?;
        Ok(self
            .to_presentational(&script)?
            .to_document(Format::Presentational))
    }
}

/// Render fully before touching the file so a failed render leaves no
/// truncated output behind.
fn write_to_path<E: Exporter>(book: &Book, exporter: &E, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    exporter.export(book, &mut buf)?;
    fs::write(path, &buf)?;
    debug!(
        path = %path.display(),
        format = E::FORMAT.extension(),
        bytes = buf.len(),
        "wrote book"
    );
    Ok(())
}

impl FromStr for Book {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_xml(s)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml_string())
    }
}
