//! Structured document exporter.

use std::io::Write;

use crate::error::{Error, Result};
use crate::markup::Format;
use crate::model::Book;

use super::Exporter;

/// Writes the round-trippable XML document.
#[derive(Debug, Clone, Default)]
pub struct XmlExporter;

impl XmlExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for XmlExporter {
    const FORMAT: Format = Format::Structured;

    /// Fails with [`Error::InvalidCharacter`] before writing anything when a
    /// title, chapter text or action label holds a character XML 1.0 forbids.
    fn export<W: Write>(&self, book: &Book, writer: &mut W) -> Result<()> {
        check_text("title", &book.title)?;
        for chapter in &book.chapters {
            check_text(&format!("chapter {} text", chapter.id), &chapter.text)?;
            for action in &chapter.actions {
                check_text(&format!("action label in chapter {}", chapter.id), &action.label)?;
            }
        }

        writer.write_all(book.to_xml_string().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// XML 1.0 `Char`: tab, newline and carriage return are the only C0 controls
/// allowed. Escaping cannot help, since `&#1;` is ill-formed too.
fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r') || (ch >= ' ' && !matches!(ch, '\u{FFFE}' | '\u{FFFF}'))
}

fn check_text(field: &str, text: &str) -> Result<()> {
    match text.chars().find(|&ch| !is_xml_char(ch)) {
        Some(ch) => Err(Error::InvalidCharacter {
            field: field.to_string(),
            ch,
        }),
        None => Ok(()),
    }
}
