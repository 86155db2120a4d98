use crate::error::HangmanError;
use crate::info_log;
use crate::manager::HangmanManager;

/// Settings for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub length: usize,
    pub max_guesses: i32,
    /// Reveal how many candidate words remain after each turn.
    pub show_candidates: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            length: 5,
            max_guesses: 7,
            show_candidates: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    NewGame,
    Exit,
}

/// Snapshot of the manager shown to the player before each guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnView {
    pub pattern: String,
    pub guessed: Vec<char>,
    pub remaining: u32,
    pub candidate_count: Option<usize>,
}

impl TurnView {
    fn from_manager(manager: &HangmanManager, settings: &GameSettings) -> Result<Self, HangmanError> {
        Ok(Self {
            pattern: manager.current_pattern()?,
            guessed: manager.guessed_letters().iter().copied().collect(),
            remaining: manager.remaining_guesses(),
            candidate_count: settings
                .show_candidates
                .then(|| manager.candidates().len()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    Won { word: String },
    /// `word` is the candidate the player is told they were chasing.
    Lost { word: String },
}

/// Front end hooks used by [`game_loop`].
pub trait GameInterface {
    fn display_intro(&mut self, settings: &GameSettings, word_count: usize);
    fn display_turn(&mut self, view: &TurnView);
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_guess_result(&mut self, letter: char, occurrences: usize);
    fn display_rejection(&mut self, error: &HangmanError);
    fn display_game_over(&mut self, result: &GameResult);
    fn display_no_words_message(&mut self, length: usize);
    fn display_exit_message(&mut self);
    fn display_new_game_message(&mut self, word_count: usize);
}

enum GameState {
    Playing,
    Finished,
}

/// Play games against the manager until the player exits.
///
/// Returns the manager's configuration error if `settings` are invalid.
pub fn game_loop<I: GameInterface>(
    dictionary: &[String],
    settings: &GameSettings,
    interface: &mut I,
) -> Result<(), HangmanError> {
    let mut manager = new_manager(dictionary, settings)?;
    interface.display_intro(settings, manager.candidates().len());
    let mut state = start_game(&manager, settings, interface);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                manager = new_manager(dictionary, settings)?;
                interface.display_new_game_message(manager.candidates().len());
                state = start_game(&manager, settings, interface);
            }
            UserAction::Guess(_) if matches!(state, GameState::Finished) => {
                interface.display_rejection(&HangmanError::GameOver);
            }
            UserAction::Guess(letter) => {
                state = play_turn(&mut manager, letter, settings, interface);
            }
        }
    }
    Ok(())
}

fn new_manager(dictionary: &[String], settings: &GameSettings) -> Result<HangmanManager, HangmanError> {
    HangmanManager::new(dictionary, settings.length, settings.max_guesses)
}

fn start_game<I: GameInterface>(
    manager: &HangmanManager,
    settings: &GameSettings,
    interface: &mut I,
) -> GameState {
    if manager.candidates().is_empty() {
        interface.display_no_words_message(settings.length);
        return GameState::Finished;
    }
    check_game_state(manager, settings, interface)
}

fn play_turn<I: GameInterface>(
    manager: &mut HangmanManager,
    letter: char,
    settings: &GameSettings,
    interface: &mut I,
) -> GameState {
    match manager.process_guess(letter) {
        Ok(occurrences) => interface.display_guess_result(letter, occurrences),
        Err(e) => {
            info_log!("play_turn() - guess '{}' rejected: {}", letter, e);
            interface.display_rejection(&e);
        }
    }
    check_game_state(manager, settings, interface)
}

fn check_game_state<I: GameInterface>(
    manager: &HangmanManager,
    settings: &GameSettings,
    interface: &mut I,
) -> GameState {
    let Some(word) = manager.candidates().first().cloned() else {
        interface.display_rejection(&HangmanError::EmptyState);
        return GameState::Finished;
    };

    if manager.is_revealed() {
        interface.display_game_over(&GameResult::Won { word });
        return GameState::Finished;
    }
    if manager.is_out_of_guesses() {
        interface.display_game_over(&GameResult::Lost { word });
        return GameState::Finished;
    }

    match TurnView::from_manager(manager, settings) {
        Ok(view) => {
            interface.display_turn(&view);
            GameState::Playing
        }
        Err(e) => {
            interface.display_rejection(&e);
            GameState::Finished
        }
    }
}
