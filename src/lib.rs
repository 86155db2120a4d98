// Library interface for evil-hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod manager;
pub mod tui;

// Re-export commonly used items for easier testing
pub use dictionary::{
    EMBEDDED_DICTIONARY, lengths_available, load_dictionary_from_file, load_dictionary_from_str,
};
pub use error::HangmanError;
pub use game_state::{GameInterface, GameResult, GameSettings, TurnView, UserAction, game_loop};
pub use manager::{HangmanManager, Partition, Pattern, UNKNOWN};
