//! Link integrity checks.
//!
//! Loading, saving and exporting accept any chapter graph. Call
//! [`Book::validate`] explicitly to find actions that lead nowhere and
//! chapters that share an id.

use std::collections::HashSet;
use std::fmt;

use crate::model::Book;

/// A problem found by [`Book::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkIssue {
    /// An action targets an id that no chapter has.
    DanglingTarget {
        chapter: u32,
        label: String,
        target: u32,
    },
    /// More than one chapter uses this id; only the first is reachable.
    DuplicateChapter { id: u32 },
}

impl fmt::Display for LinkIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkIssue::DanglingTarget {
                chapter,
                label,
                target,
            } => write!(
                f,
                "chapter {chapter}: action {label:?} targets missing chapter {target}"
            ),
            LinkIssue::DuplicateChapter { id } => write!(f, "chapter id {id} is used more than once"),
        }
    }
}

impl Book {
    /// Check every action target against the chapter ids.
    ///
    /// Issues are reported in chapter order. An empty result means every
    /// action leads to a chapter and every id is unique.
    pub fn validate(&self) -> Vec<LinkIssue> {
        let mut issues = Vec::new();
        let mut ids = HashSet::new();
        let mut duplicates = HashSet::new();

        for chapter in &self.chapters {
            if !ids.insert(chapter.id) && duplicates.insert(chapter.id) {
                issues.push(LinkIssue::DuplicateChapter { id: chapter.id });
            }
        }

        for chapter in &self.chapters {
            for action in &chapter.actions {
                if !ids.contains(&action.target) {
                    issues.push(LinkIssue::DanglingTarget {
                        chapter: chapter.id,
                        label: action.label.clone(),
                        target: action.target,
                    });
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Action, Chapter, End};

    #[test]
    fn test_clean_book() {
        let book = Book::new(
            "Loop",
            vec![
                Chapter::new(1, "Again?").with_action(Action::new("Yes", 1)),
                Chapter::new(2, "Bye.").with_end(End::Win),
            ],
        );
        assert!(book.validate().is_empty());
    }

    #[test]
    fn test_dangling_target() {
        let book = Book::new(
            "Broken",
            vec![Chapter::new(1, "Go?")
                .with_action(Action::new("Forward", 7))
                .with_action(Action::new("Back", 1))],
        );

        let issues = book.validate();
        assert_eq!(
            issues,
            vec![LinkIssue::DanglingTarget {
                chapter: 1,
                label: "Forward".to_string(),
                target: 7,
            }]
        );
        assert_eq!(
            issues[0].to_string(),
            "chapter 1: action \"Forward\" targets missing chapter 7"
        );
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let book = Book::new(
            "Twins",
            vec![
                Chapter::new(3, "a"),
                Chapter::new(3, "b"),
                Chapter::new(3, "c"),
            ],
        );
        assert_eq!(book.validate(), vec![LinkIssue::DuplicateChapter { id: 3 }]);
    }
}
