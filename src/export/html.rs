//! Presentational document exporter.

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::markup::Format;
use crate::model::Book;

use super::Exporter;

/// Click-to-reveal behavior compiled into the crate.
///
/// Defines `reveal(id)`, which hides every `.chapter` block except the one
/// with the given id, and wires every `.action` link to reveal its target.
pub const BUNDLED_SCRIPT: &str = include_str!("../../resources/reveal.js");

/// Where the interactivity script comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScriptSource {
    /// [`BUNDLED_SCRIPT`].
    #[default]
    Bundled,
    /// A script file read at export time.
    File(PathBuf),
    /// Script source given directly.
    Inline(String),
}

impl ScriptSource {
    /// Resolve the script text. Only [`ScriptSource::File`] touches the disk.
    pub fn load(&self) -> Result<Cow<'_, str>> {
        match self {
            ScriptSource::Bundled => Ok(Cow::Borrowed(BUNDLED_SCRIPT)),
            ScriptSource::File(path) => {
                debug!(path = %path.display(), "reading interactivity script");
                Ok(Cow::Owned(fs::read_to_string(path)?))
            }
            ScriptSource::Inline(source) => Ok(Cow::Borrowed(source.as_str())),
        }
    }
}

/// Configuration for HTML export.
#[derive(Debug, Clone, Default)]
pub struct HtmlConfig {
    /// Script embedded after the chapters. Defaults to the bundled one.
    pub script: ScriptSource,
}

impl HtmlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(mut self, script: ScriptSource) -> Self {
        self.script = script;
        self
    }
}

/// Writes the interactive HTML document.
///
/// # Example
///
/// ```
/// use gamebook::{Action, Book, Chapter, End};
/// use gamebook::export::{Exporter, HtmlExporter};
///
/// let book = Book::new(
///     "Fork",
///     vec![
///         Chapter::new(1, "Left or right?").with_action(Action::new("Left", 2)),
///         Chapter::new(2, "A dead end.").with_end(End::Fail),
///     ],
/// );
///
/// let mut out = Vec::new();
/// HtmlExporter::new().export(&book, &mut out)?;
/// let html = String::from_utf8(out).unwrap();
/// assert!(html.trim_end().ends_with("reveal(1);</script>\n  </body>\n</html>"));
/// # Ok::<(), gamebook::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    config: HtmlConfig,
}

impl HtmlExporter {
    /// Create a new exporter with default configuration.
    pub fn new() -> Self {
        Self {
            config: HtmlConfig::default(),
        }
    }

    /// Configure the exporter with custom settings.
    pub fn with_config(mut self, config: HtmlConfig) -> Self {
        self.config = config;
        self
    }
}

impl Exporter for HtmlExporter {
    const FORMAT: Format = Format::Presentational;

    fn export<W: Write>(&self, book: &Book, writer: &mut W) -> Result<()> {
        let html = book.to_html_string(&self.config)?;
        writer.write_all(html.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Action, Chapter, End};

    fn book() -> Book {
        Book::new(
            "Fork & Spoon",
            vec![
                Chapter::new(3, "Left or right?")
                    .with_action(Action::new("Left", 4))
                    .with_action(Action::new("Right", 5)),
                Chapter::new(4, "A dead end.").with_end(End::Fail),
                Chapter::new(5, "Daylight!").with_end(End::Win),
            ],
        )
    }

    fn export(config: HtmlConfig) -> Result<String> {
        let mut out = Vec::new();
        HtmlExporter::new()
            .with_config(config)
            .export(&book(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_document_shape() {
        let html = export(HtmlConfig::new()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n  <head>\n"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains("<title>Fork &amp; Spoon</title>"));
        assert!(html.contains("<div title=\"Fork &amp; Spoon\">"));
        assert!(html.contains("<hr>"));
        assert!(html.contains("<script type=\"text/javascript\">"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_bundled_script_embedded_verbatim() {
        let html = export(HtmlConfig::new()).unwrap();

        assert!(html.contains(BUNDLED_SCRIPT.trim_end()));
        assert!(html.contains("reveal(3);</script>"));
    }

    #[test]
    fn test_inline_script() {
        let config = HtmlConfig::new().with_script(ScriptSource::Inline("// custom".into()));
        let html = export(config).unwrap();

        assert!(html.contains("<script type=\"text/javascript\">// custom\nreveal(3);</script>"));
    }

    #[test]
    fn test_script_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("reveal.js");
        fs::write(&path, "function reveal(id) { if (a && b) {} }\n").unwrap();

        let html = export(HtmlConfig::new().with_script(ScriptSource::File(path))).unwrap();
        assert!(html.contains("function reveal(id) { if (a && b) {} }\nreveal(3);"));
    }

    #[test]
    fn test_missing_script_file() {
        let config = HtmlConfig::new().with_script(ScriptSource::File("no/such/script.js".into()));
        assert!(matches!(export(config), Err(Error::Io(_))));
    }

    #[test]
    fn test_chapter_blocks_in_order() {
        let html = export(HtmlConfig::new()).unwrap();

        let positions: Vec<_> = ["id=\"3\"", "id=\"4\"", "id=\"5\""]
            .iter()
            .map(|needle| html.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let left = html.find("href=\"#4\"").unwrap();
        let right = html.find("href=\"#5\"").unwrap();
        assert!(left < right);
    }
}
