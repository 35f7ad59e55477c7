//! Error types for gamebook operations.

use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Errors that can occur while building, reading, or writing a gamebook.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    Attr(#[from] AttrError),

    #[error("XML escape error: {0}")]
    Escape(#[from] EscapeError),

    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error("Missing required element: {0}")]
    MissingElement(String),

    #[error("Missing required attribute `{attribute}` on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("Invalid integer in `{attribute}` attribute: {value:?}")]
    InvalidInteger {
        attribute: &'static str,
        value: String,
    },

    #[error("Invalid chapter reference: {0:?} (expected `#<id>`)")]
    InvalidReference(String),

    #[error("Invalid chapter ending value: {0:?} (expected not, win or fail)")]
    InvalidEnd(String),

    #[error("Character {ch:?} in {field} cannot be stored in XML")]
    InvalidCharacter { field: String, ch: char },

    #[error("Book has no chapters")]
    EmptyBook,
}

pub type Result<T> = std::result::Result<T, Error>;
