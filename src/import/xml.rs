//! Structured document parser.
//!
//! The document is read as a stream of events. Only `<book>`, the
//! `<chapter>` elements below it, and the `<action>` elements inside a
//! chapter carry data; everything else (the `<h1>` heading included) is
//! skipped but still searched. Chapters and actions are collected at any
//! depth, in the order their start tags appear. An action belongs to every
//! chapter that encloses it.
//!
//! Text follows the XML data model: a chapter's body and an action's label
//! are the character data between the start tag and the first child node.
//! Whitespace after a child belongs to that child and is ignored.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};
use crate::model::{Action, Book, Chapter, End};
use crate::util::{decode_text, extract_xml_encoding, resolve_entity};

/// Read and parse a structured document from disk.
pub fn read_book<P: AsRef<Path>>(path: P) -> Result<Book> {
    let bytes = fs::read(path)?;
    let content = decode_text(&bytes, extract_xml_encoding(&bytes));
    parse_book(&content)
}

/// Parse a structured document.
pub fn parse_book(content: &str) -> Result<Book> {
    let mut reader = Reader::from_str(content);
    let mut parser = BookParser::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => parser.start(&e)?,
            Event::Empty(e) => {
                parser.start(&e)?;
                parser.end();
            }
            Event::End(_) => parser.end(),
            Event::Text(e) => parser.text(&String::from_utf8_lossy(e.as_ref())),
            Event::CData(e) => parser.text(&String::from_utf8_lossy(&e)),
            Event::GeneralRef(e) => {
                let entity = String::from_utf8_lossy(e.as_ref());
                let resolved = resolve_entity(&entity)
                    .ok_or_else(|| Error::Malformed(format!("unknown entity &{entity};")))?;
                parser.text(&resolved);
            }
            Event::Comment(_) | Event::PI(_) => parser.close_text(),
            Event::Eof => break,
            _ => {}
        }
    }

    parser.finish()
}

#[derive(Default)]
struct BookParser {
    depth: usize,
    title: Option<String>,
    /// One slot per `<chapter>` start tag, filled when the chapter closes.
    chapters: Vec<Option<Chapter>>,
    /// Elements open below `<book>`, innermost last.
    stack: Vec<Frame>,
}

enum Frame {
    Chapter(ChapterState),
    Action(ActionState),
    Other,
}

struct ChapterState {
    chapter: Chapter,
    slot: usize,
    /// One slot per descendant `<action>` start tag.
    actions: Vec<Option<Action>>,
    text_open: bool,
}

struct ActionState {
    action: Action,
    /// `(stack index, action slot)` for every chapter enclosing this action.
    owners: Vec<(usize, usize)>,
    text_open: bool,
}

impl BookParser {
    fn start(&mut self, e: &BytesStart) -> Result<()> {
        let depth = self.depth;
        self.depth += 1;

        if depth == 0 {
            return self.start_book(e);
        }

        self.close_text();
        let frame = match e.local_name().as_ref() {
            b"chapter" => {
                let id = required_attribute(e, "chapter", "id")?;
                let end = required_attribute(e, "chapter", "end")?;
                let chapter =
                    Chapter::new(parse_id(&id)?, String::new()).with_end(end.parse::<End>()?);
                self.chapters.push(None);
                Frame::Chapter(ChapterState {
                    chapter,
                    slot: self.chapters.len() - 1,
                    actions: Vec::new(),
                    text_open: true,
                })
            }
            b"action" if self.in_chapter() => {
                let target = required_attribute(e, "action", "target")?;
                let action = Action::new(String::new(), Action::parse_reference(&target)?);

                let mut owners = Vec::new();
                for (index, frame) in self.stack.iter_mut().enumerate() {
                    if let Frame::Chapter(chapter) = frame {
                        chapter.actions.push(None);
                        owners.push((index, chapter.actions.len() - 1));
                    }
                }
                Frame::Action(ActionState {
                    action,
                    owners,
                    text_open: true,
                })
            }
            _ => Frame::Other,
        };
        self.stack.push(frame);
        Ok(())
    }

    fn start_book(&mut self, e: &BytesStart) -> Result<()> {
        if e.local_name().as_ref() != b"book" {
            return Err(Error::MissingElement(format!(
                "<book> root element (found <{}>)",
                String::from_utf8_lossy(e.local_name().as_ref())
            )));
        }
        if self.title.is_some() {
            return Err(Error::Malformed("more than one root element".to_string()));
        }
        self.title = Some(required_attribute(e, "book", "title")?);
        Ok(())
    }

    fn end(&mut self) {
        self.depth = self.depth.saturating_sub(1);

        match self.stack.pop() {
            Some(Frame::Action(state)) => {
                for (index, slot) in state.owners {
                    if let Some(Frame::Chapter(chapter)) = self.stack.get_mut(index) {
                        chapter.actions[slot] = Some(state.action.clone());
                    }
                }
            }
            Some(Frame::Chapter(state)) => {
                let mut chapter = state.chapter;
                chapter.actions = state.actions.into_iter().flatten().collect();
                self.chapters[state.slot] = Some(chapter);
            }
            Some(Frame::Other) | None => {}
        }
    }

    fn in_chapter(&self) -> bool {
        self.stack.iter().any(|f| matches!(f, Frame::Chapter(_)))
    }

    fn text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(Frame::Action(action)) if action.text_open => action.action.label.push_str(text),
            Some(Frame::Chapter(chapter)) if chapter.text_open => {
                chapter.chapter.text.push_str(text)
            }
            _ => {}
        }
    }

    /// A child node starts: the innermost open text run is over.
    fn close_text(&mut self) {
        match self.stack.last_mut() {
            Some(Frame::Action(action)) => action.text_open = false,
            Some(Frame::Chapter(chapter)) => chapter.text_open = false,
            Some(Frame::Other) | None => {}
        }
    }

    fn finish(self) -> Result<Book> {
        let title = self
            .title
            .ok_or_else(|| Error::MissingElement("<book> root element".to_string()))?;
        if self.depth != 0 {
            return Err(Error::Malformed("unexpected end of document".to_string()));
        }
        Ok(Book::new(title, self.chapters.into_iter().flatten().collect()))
    }
}

fn parse_id(value: &str) -> Result<u32> {
    value.trim().parse().map_err(|_| Error::InvalidInteger {
        attribute: "id",
        value: value.to_string(),
    })
}

fn required_attribute(
    e: &BytesStart,
    element: &'static str,
    attribute: &'static str,
) -> Result<String> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == attribute.as_bytes() {
            let raw = String::from_utf8_lossy(&attr.value);
            return Ok(unescape(&raw)?.into_owned());
        }
    }
    Err(Error::MissingAttribute { element, attribute })
}
