//! Reading gamebooks back from the structured document format.

mod xml;

pub use xml::{parse_book, read_book};
