use crate::error::HangmanError;
use crate::game_state::{GameInterface, GameResult, GameSettings, TurnView, UserAction};
use clap::Parser;
use std::io::BufRead;

/// Evil Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited dictionary file
    #[arg(short = 'i', long = "input")]
    pub dictionary_path: Option<String>,

    /// Length of the word to guess
    #[arg(short = 'l', long = "length", default_value_t = 5)]
    pub length: usize,

    /// Number of wrong guesses allowed
    #[arg(short = 'g', long = "guesses", default_value_t = 7, allow_negative_numbers = true)]
    pub max_guesses: i32,

    /// Show how many candidate words remain
    #[arg(short = 's', long = "show-candidates")]
    pub show_candidates: bool,

    /// Use the terminal UI instead of the line-based interface
    #[arg(long)]
    pub tui: bool,
}

impl Cli {
    #[must_use]
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            length: self.length,
            max_guesses: self.max_guesses,
            show_candidates: self.show_candidates,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum GuessInput {
    Valid(char),
    Invalid,
    Exit,
    NewGame,
}

fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    println!("\nYour guess? (a letter, or 'exit' to quit, or 'next' to start a new game)");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => return GuessInput::Exit,
        Ok(_) => {}
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            return GuessInput::Exit;
        }
    }
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "exit" => GuessInput::Exit,
        "next" => GuessInput::NewGame,
        _ => match parse_letter(&input) {
            Some(letter) => GuessInput::Valid(letter),
            None => {
                println!("Invalid guess. Please enter a single letter.");
                GuessInput::Invalid
            }
        },
    }
}

pub fn display_intro(settings: &GameSettings, word_count: usize) {
    println!("Welcome to hangman.");
    println!(
        "Guess a {}-letter word. You may miss {} times.",
        settings.length, settings.max_guesses
    );
    if settings.show_candidates {
        println!("Loaded {word_count} words of that length.");
    }
}

pub fn display_turn(view: &TurnView) {
    println!();
    println!("guesses : {}", view.remaining);
    let guessed: Vec<String> = view.guessed.iter().map(char::to_string).collect();
    println!("guessed : [{}]", guessed.join(", "));
    println!("current : {}", view.pattern);
    if let Some(count) = view.candidate_count {
        println!("words   : {count}");
    }
}

pub fn display_guess_result(letter: char, occurrences: usize) {
    match occurrences {
        0 => println!("Sorry, there are no {letter}'s"),
        1 => println!("Yes, there is one {letter}"),
        n => println!("Yes, there are {n} {letter}'s"),
    }
}

pub fn display_rejection(error: &HangmanError) {
    match error {
        HangmanError::DuplicateGuess(letter) => {
            println!("You already guessed '{letter}'.");
        }
        HangmanError::GameOver => {
            println!("The game is over. Type 'next' for a new game or 'exit' to quit.");
        }
        other => println!("Error: {other}"),
    }
}

pub fn display_game_over(result: &GameResult) {
    match result {
        GameResult::Won { word } => println!("\nanswer = {word}\nYou beat me"),
        GameResult::Lost { word } => println!("\nanswer = {word}\nSorry, you lose"),
    }
    println!("Type 'next' for a new game or 'exit' to quit.");
}

pub fn display_no_words_message(length: usize) {
    println!("The dictionary has no {length}-letter words. Try another length.");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

pub fn display_new_game_message() {
    println!("New game started.");
}

/// CLI implementation of the `GameInterface` trait.
/// Reads commands from any `BufRead` and prints to stdout.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_intro(&mut self, settings: &GameSettings, word_count: usize) {
        display_intro(settings, word_count);
    }

    fn display_turn(&mut self, view: &TurnView) {
        display_turn(view);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_guess(&mut self.reader) {
            GuessInput::Valid(letter) => Some(UserAction::Guess(letter)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Invalid => None,
        }
    }

    fn display_guess_result(&mut self, letter: char, occurrences: usize) {
        display_guess_result(letter, occurrences);
    }

    fn display_rejection(&mut self, error: &HangmanError) {
        display_rejection(error);
    }

    fn display_game_over(&mut self, result: &GameResult) {
        display_game_over(result);
    }

    fn display_no_words_message(&mut self, length: usize) {
        display_no_words_message(length);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }

    fn display_new_game_message(&mut self, _word_count: usize) {
        display_new_game_message();
    }
}
