//! Reader choices and the `#N` references that link them to chapters.

use std::fmt;

use crate::error::{Error, Result};
use crate::markup::{Element, Format};

use super::ToMarkup;

/// Marker that prefixes a chapter id in a reference (`#4`).
pub const REFERENCE_MARKER: char = '#';

/// A single reader choice: a label and the id of the chapter it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    pub label: String,
    pub target: u32,
}

impl Action {
    pub fn new(label: impl Into<String>, target: u32) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }

    /// The target formatted as a reference, e.g. `#4`.
    pub fn reference(&self) -> String {
        format!("{REFERENCE_MARKER}{}", self.target)
    }

    /// Parse a reference such as `#4` back into a chapter id.
    ///
    /// The marker is required and the remainder must be an unsigned integer.
    /// Whitespace around the reference and around the id is ignored, as it is
    /// for chapter ids.
    pub fn parse_reference(reference: &str) -> Result<u32> {
        let digits = reference
            .trim()
            .strip_prefix(REFERENCE_MARKER)
            .ok_or_else(|| Error::InvalidReference(reference.to_string()))?;
        digits.trim().parse().map_err(|_| Error::InvalidInteger {
            attribute: "target",
            value: reference.to_string(),
        })
    }
}

impl ToMarkup for Action {
    fn to_structured(&self) -> Element {
        Element::new("action")
            .with_attr("target", self.reference())
            .with_text(self.label.as_str())
    }

    fn to_presentational(&self) -> Element {
        Element::new("a")
            .with_attr("href", self.reference())
            .with_attr("class", "action")
            .with_text(self.label.as_str())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Format::Structured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_format() {
        assert_eq!(Action::new("Jump into the hole", 4).reference(), "#4");
    }

    #[test]
    fn test_parse_reference() {
        assert_eq!(Action::parse_reference("#4").unwrap(), 4);
        assert_eq!(Action::parse_reference("#120").unwrap(), 120);
    }

    #[test]
    fn test_parse_reference_ignores_whitespace() {
        assert_eq!(Action::parse_reference("# 4").unwrap(), 4);
        assert_eq!(Action::parse_reference(" #4 ").unwrap(), 4);
        assert_eq!(Action::parse_reference("#\t12\n").unwrap(), 12);
    }

    #[test]
    fn test_parse_reference_requires_marker() {
        assert!(matches!(
            Action::parse_reference("4"),
            Err(Error::InvalidReference(r)) if r == "4"
        ));
        assert!(matches!(
            Action::parse_reference(""),
            Err(Error::InvalidReference(_))
        ));
    }

    #[test]
    fn test_parse_reference_rejects_non_integers() {
        for bad in ["#", "#four", "#-1", "#4.5", "#4 4", "##4"] {
            assert!(
                matches!(
                    Action::parse_reference(bad),
                    Err(Error::InvalidInteger { attribute: "target", .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_structured_node() {
        let node = Action::new("Enter cave", 2).to_structured();

        assert_eq!(node.name, "action");
        assert_eq!(node.attr("target"), Some("#2"));
        assert_eq!(node.text.as_deref(), Some("Enter cave"));
        assert_eq!(
            Action::new("Enter cave", 2).render(Format::Structured),
            r##"<action target="#2">Enter cave</action>"##
        );
    }

    #[test]
    fn test_presentational_node() {
        let action = Action::new("Exit cave", 1);

        assert_eq!(
            action.render(Format::Presentational),
            r##"<a href="#1" class="action">Exit cave</a>"##
        );
    }

    #[test]
    fn test_display_is_structured() {
        let action = Action::new("Return home", 5);
        assert_eq!(action.to_string(), action.render(Format::Structured));
    }
}
