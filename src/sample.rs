//! A small built-in story, handy for demos and smoke tests.

use crate::model::{Action, Book, Chapter, End};

/// The five-chapter "You are the hero!" adventure.
///
/// Chapter 1 branches to 5, 4 and 2; chapter 2 to 3 and 1; chapter 3 to 4.
/// Chapter 4 is lost and chapter 5 is won.
pub fn sample_book() -> Book {
    Book::new(
        "You are the hero!",
        vec![
            Chapter::new(
                1,
                "Your journey begins!\n\
                 You are standing at the entrance of a cave\n\
                 with a deep hole next to it.\n\
                 What do you do?",
            )
            .with_action(Action::new("Return home", 5))
            .with_action(Action::new("Jump into the hole", 4))
            .with_action(Action::new("Enter cave", 2)),
            Chapter::new(2, "It's pitch black inside!")
                .with_action(Action::new("Charge forward!", 3))
                .with_action(Action::new("Exit cave", 1)),
            Chapter::new(3, "You ran into a deep hole and fell down.")
                .with_action(Action::new("You know what's next, right?", 4)),
            Chapter::new(4, "You have died!").with_end(End::Fail),
            Chapter::new(
                5,
                "Congratulations!\nYou have successfully survived the adventure!",
            )
            .with_end(End::Win),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let book = sample_book();

        let ids: Vec<_> = book.chapters.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let targets: Vec<Vec<u32>> = book
            .chapters
            .iter()
            .map(|c| c.actions.iter().map(|a| a.target).collect())
            .collect();
        assert_eq!(targets, vec![vec![5, 4, 2], vec![3, 1], vec![4], vec![], vec![]]);

        assert_eq!(book.chapters[0].text.lines().count(), 4);
        assert!(book.validate().is_empty());
    }
}
