//! # gamebook
//!
//! Branching-narrative gamebooks: build them in code, store them as XML, and
//! export them as a single interactive HTML page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gamebook::Book;
//!
//! // XML -> interactive HTML
//! let book = Book::open("story.xml").unwrap();
//! book.export("story.html").unwrap();
//! ```
//!
//! ## Building Books
//!
//! A [`Book`] holds [`Chapter`]s, and each chapter offers [`Action`]s that
//! lead to other chapters by id:
//!
//! ```
//! use gamebook::{Action, Book, Chapter, End, Format, ToMarkup};
//!
//! let book = Book::new(
//!     "The Bridge",
//!     vec![
//!         Chapter::new(1, "A rope bridge sways over the gorge.")
//!             .with_action(Action::new("Cross it", 2))
//!             .with_action(Action::new("Turn back", 3)),
//!         Chapter::new(2, "The ropes snap.").with_end(End::Fail),
//!         Chapter::new(3, "You live to tell the tale.").with_end(End::Win),
//!     ],
//! );
//!
//! let xml = book.to_xml_string();
//! assert_eq!(Book::from_xml(&xml).unwrap(), book);
//!
//! assert_eq!(
//!     book.chapters[0].actions[0].render(Format::Structured),
//!     r##"<action target="#2">Cross it</action>"##
//! );
//! ```

pub mod error;
pub mod export;
pub mod import;
pub mod markup;
pub mod model;
pub mod sample;
pub(crate) mod util;
pub mod validate;

pub use error::{Error, Result};
pub use export::{HtmlConfig, ScriptSource};
pub use markup::{Element, Format};
pub use model::{Action, Book, Chapter, End, ToMarkup};
pub use sample::sample_book;
pub use validate::LinkIssue;
