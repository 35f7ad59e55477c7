//! The gamebook data model: a [`Book`] of [`Chapter`]s of [`Action`]s.
//!
//! Actions point at chapters by id only. Resolving a target to a chapter is
//! up to the consumer (see [`Book::chapter`]), and nothing here checks that a
//! target exists; [`Book::validate`] is the explicit pass for that.

mod action;
mod book;
mod chapter;

pub use action::{Action, REFERENCE_MARKER};
pub use book::Book;
pub use chapter::{Chapter, End};

use crate::markup::{Element, Format};

/// Lowering of a model fragment to markup, in either output format.
pub trait ToMarkup {
    /// The node stored in the structured (XML) document.
    fn to_structured(&self) -> Element;

    /// The node shown in the presentational (HTML) document.
    fn to_presentational(&self) -> Element;

    /// Render this fragment as indented text.
    fn render(&self, format: Format) -> String {
        match format {
            Format::Structured => self.to_structured().render(format),
            Format::Presentational => self.to_presentational().render(format),
        }
    }
}
