//! Markup tree shared by the structured (XML) and presentational (HTML) outputs.
//!
//! Every gamebook entity lowers itself to an [`Element`] tree, and the tree is
//! printed in one of the two [`Format`]s. Keeping a single tree type means the
//! two outputs only differ in how they are printed, not in how they are built.
//!
//! # Example
//!
//! ```
//! use gamebook::markup::{Element, Format};
//!
//! let link = Element::new("a")
//!     .with_attr("href", "#4")
//!     .with_attr("class", "action")
//!     .with_text("Jump into the hole");
//!
//! assert_eq!(
//!     link.render(Format::Presentational),
//!     r##"<a href="#4" class="action">Jump into the hole</a>"##
//! );
//! ```

mod writer;

/// Output selector for rendering a markup tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// The durable, round-trippable XML document.
    Structured,
    /// The human-facing HTML document.
    Presentational,
}

impl Format {
    /// Conventional file extension for documents in this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Structured => "xml",
            Format::Presentational => "html",
        }
    }
}

/// An owned markup element.
///
/// `text` follows the XML data model: it is the character data between the
/// start tag and the first child element. `None` means the element carries no
/// text node at all, which lets the printer indent its children freely;
/// `Some` (even empty) pins the first child directly after the text so that no
/// indentation whitespace becomes part of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Append an attribute. Attributes are printed in insertion order.
    pub fn with_attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Direct children with the given tag name, in order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Print this element (and its subtree) with two-space indentation.
    pub fn render(&self, format: Format) -> String {
        writer::render(self, format)
    }

    /// Print this element as a complete document, with the XML declaration
    /// or the HTML doctype in front.
    pub fn to_document(&self, format: Format) -> String {
        let prolog = match format {
            Format::Structured => "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            Format::Presentational => "<!DOCTYPE html>\n",
        };
        let mut doc = String::from(prolog);
        doc.push_str(&self.render(format));
        doc.push('\n');
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_lookup() {
        let el = Element::new("chapter")
            .with_attr("id", "3")
            .with_attr("end", "win");

        assert_eq!(el.attr("id"), Some("3"));
        assert_eq!(el.attr("end"), Some("win"));
        assert_eq!(el.attr("title"), None);
    }

    #[test]
    fn test_children_named_keeps_order() {
        let el = Element::new("book")
            .with_child(Element::new("h1"))
            .with_child(Element::new("chapter").with_attr("id", "2"))
            .with_child(Element::new("chapter").with_attr("id", "1"));

        let ids: Vec<_> = el
            .children_named("chapter")
            .filter_map(|c| c.attr("id"))
            .collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_document_prolog() {
        let el = Element::new("book").with_attr("title", "T");

        assert!(
            el.to_document(Format::Structured)
                .starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<book")
        );
        assert!(
            el.to_document(Format::Presentational)
                .starts_with("<!DOCTYPE html>\n<book")
        );
    }

    #[test]
    fn test_extension() {
        assert_eq!(Format::Structured.extension(), "xml");
        assert_eq!(Format::Presentational.extension(), "html");
    }
}
