//! Chapters: a block of story text, the choices it offers, and whether it
//! ends the story.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::markup::{Element, Format};

use super::{Action, ToMarkup};

/// Whether a chapter continues the story or ends it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum End {
    /// The story continues.
    #[default]
    Not,
    Win,
    Fail,
}

impl End {
    pub fn as_str(self) -> &'static str {
        match self {
            End::Not => "not",
            End::Win => "win",
            End::Fail => "fail",
        }
    }
}

impl FromStr for End {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "not" => Ok(End::Not),
            "win" => Ok(End::Win),
            "fail" => Ok(End::Fail),
            other => Err(Error::InvalidEnd(other.to_string())),
        }
    }
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A narrative unit: body text, the choices offered after it, and whether it
/// ends the story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: u32,
    pub text: String,
    pub actions: Vec<Action>,
    pub end: End,
}

impl Chapter {
    /// Create a continuing chapter with no actions yet.
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            actions: Vec::new(),
            end: End::Not,
        }
    }

    /// Create a chapter from a textual end value (`not`, `win` or `fail`).
    ///
    /// Fails with [`Error::InvalidEnd`] for anything else.
    pub fn try_new(
        id: u32,
        text: impl Into<String>,
        actions: Vec<Action>,
        end: &str,
    ) -> Result<Self> {
        Ok(Self {
            id,
            text: text.into(),
            actions,
            end: end.parse()?,
        })
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn with_end(mut self, end: End) -> Self {
        self.end = end;
        self
    }

    /// True for chapters that end the story, won or lost.
    pub fn is_terminal(&self) -> bool {
        self.end != End::Not
    }
}

impl ToMarkup for Chapter {
    fn to_structured(&self) -> Element {
        let mut chapter = Element::new("chapter")
            .with_attr("id", self.id.to_string())
            .with_attr("end", self.end.as_str())
            .with_text(self.text.as_str());
        for action in &self.actions {
            chapter.push(action.to_structured());
        }
        chapter
    }

    fn to_presentational(&self) -> Element {
        let text = Element::new("p").with_text(self.text.as_str());

        let mut action_list = Element::new("ul");
        for action in &self.actions {
            action_list.push(Element::new("li").with_child(action.to_presentational()));
        }

        Element::new("div")
            .with_attr("id", self.id.to_string())
            .with_attr("end", self.end.as_str())
            .with_attr("class", "chapter")
            .with_child(text)
            .with_child(action_list)
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Format::Structured))
    }
}
