use evil_hangman::cli::{CliInterface, parse_cli};
use evil_hangman::logging::{LogTarget, init_logger};
use evil_hangman::tui::TuiInterface;
use evil_hangman::{
    EMBEDDED_DICTIONARY, GameSettings, HangmanError, game_loop, lengths_available,
    load_dictionary_from_file, load_dictionary_from_str,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    let target = if cli.tui {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    if let Err(e) = init_logger(target) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let dictionary = match &cli.dictionary_path {
        Some(path) => match load_dictionary_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load dictionary from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_dictionary_from_str(EMBEDDED_DICTIONARY),
    };
    log::info!("Loaded {} dictionary words", dictionary.len());

    let settings = cli.settings();
    if !lengths_available(&dictionary).contains(&settings.length) {
        let lengths: Vec<String> = lengths_available(&dictionary)
            .iter()
            .map(ToString::to_string)
            .collect();
        log::warn!(
            "No words of length {}; available lengths: {}",
            settings.length,
            lengths.join(", ")
        );
    }

    let result = if cli.tui {
        run_tui(&dictionary, &settings)
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&dictionary, &settings, &mut interface).map_err(|e| e.to_string())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run_tui(dictionary: &[String], settings: &GameSettings) -> Result<(), String> {
    let mut interface =
        TuiInterface::new().map_err(|e| format!("Failed to start terminal UI: {e}"))?;
    let result = game_loop(dictionary, settings, &mut interface);
    // Restore the terminal before any error is printed.
    drop(interface);
    result.map_err(|e: HangmanError| e.to_string())
}
