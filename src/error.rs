use thiserror::Error;

/// The errors a [`HangmanManager`](crate::manager::HangmanManager) can produce.
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub enum HangmanError {
    /// The manager was constructed with a word length below 1 or a negative
    /// guess budget.
    #[error("invalid configuration: length {length}, max guesses {max_guesses}")]
    InvalidConfiguration { length: usize, max_guesses: i32 },

    /// The pattern was requested while no candidate words remain.
    #[error("the candidate word set is empty")]
    EmptyState,

    /// A guess was made with no guesses left or no candidate words.
    #[error("the game is over")]
    GameOver,

    /// The letter has already been guessed this game.
    #[error("the letter '{0}' has already been guessed")]
    DuplicateGuess(char),
}
