// Integration tests for the evil-hangman application
// These tests verify that all modules work together correctly

use evil_hangman::cli::CliInterface;
use evil_hangman::*;
use std::io::Cursor;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}

fn settings(length: usize, max_guesses: i32) -> GameSettings {
    GameSettings {
        length,
        max_guesses,
        show_candidates: false,
    }
}

#[test]
fn test_end_to_end_game_workflow() {
    // Load a dictionary from text and play a full game through the CLI interface
    let dictionary = load_dictionary_from_str("cat\ncar\ncan\nhorse\nox\n");
    let input = "c\na\nt\nr\nn\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&dictionary, &settings(3, 3), &mut interface).unwrap();
}

#[test]
fn test_manager_scenario_through_public_api() {
    let dictionary = words(&["cat", "car", "can"]);
    let mut hangman = HangmanManager::new(&dictionary, 3, 3).unwrap();

    assert_eq!(hangman.process_guess('c'), Ok(1));
    assert_eq!(hangman.current_pattern().unwrap(), "c - -");
    assert_eq!(hangman.process_guess('a'), Ok(1));
    assert_eq!(hangman.current_pattern().unwrap(), "c a -");
    assert_eq!(hangman.process_guess('t'), Ok(0));
    assert_eq!(hangman.remaining_guesses(), 2);
    assert_eq!(
        hangman.candidates().iter().cloned().collect::<Vec<_>>(),
        vec!["can", "car"]
    );
}

#[test]
fn test_manager_avoids_common_letter() {
    // The manager should dodge 'e' when most words lack it
    let dictionary = load_dictionary_from_str("bead\nbeam\nlion\nclub\ndrum\nfarm\n");
    let mut hangman = HangmanManager::new(&dictionary, 4, 5).unwrap();

    assert_eq!(hangman.process_guess('e'), Ok(0));
    assert_eq!(hangman.remaining_guesses(), 4);
    assert!(hangman.candidates().iter().all(|w| !w.contains('e')));
    assert_eq!(hangman.candidates().len(), 4);
}

#[test]
fn test_manager_with_embedded_dictionary() {
    let dictionary = load_dictionary_from_str(EMBEDDED_DICTIONARY);
    let mut hangman = HangmanManager::new(&dictionary, 5, 10).unwrap();
    let initial = hangman.candidates().len();
    assert!(initial > 100);

    let mut previous = initial;
    for letter in ['e', 'a', 'r', 'o', 't', 'i', 's'] {
        if hangman.remaining_guesses() == 0 {
            break;
        }
        hangman.process_guess(letter).unwrap();
        assert!(hangman.candidates().len() <= previous);
        assert!(!hangman.candidates().is_empty());
        previous = hangman.candidates().len();
    }
    assert_eq!(hangman.guessed_letters().len(), 7);
    assert!(hangman.current_pattern().is_ok());
}

#[test]
fn test_error_paths_through_public_api() {
    let dictionary = words(&["cat"]);

    assert!(matches!(
        HangmanManager::new(&dictionary, 0, 3),
        Err(HangmanError::InvalidConfiguration { .. })
    ));
    assert!(matches!(
        HangmanManager::new(&dictionary, 3, -5),
        Err(HangmanError::InvalidConfiguration { .. })
    ));

    let mut empty = HangmanManager::new(&dictionary, 4, 3).unwrap();
    assert_eq!(empty.current_pattern(), Err(HangmanError::EmptyState));
    assert_eq!(empty.process_guess('a'), Err(HangmanError::GameOver));

    let mut hangman = HangmanManager::new(&dictionary, 3, 3).unwrap();
    hangman.process_guess('a').unwrap();
    assert_eq!(
        hangman.process_guess('a'),
        Err(HangmanError::DuplicateGuess('a'))
    );
}

#[test]
fn test_game_loop_invalid_configuration() {
    let dictionary = words(&["cat"]);
    let mut interface = CliInterface::new(Cursor::new("exit\n"));
    let result = game_loop(&dictionary, &settings(3, -1), &mut interface);
    assert_eq!(
        result,
        Err(HangmanError::InvalidConfiguration {
            length: 3,
            max_guesses: -1
        })
    );
}

#[test]
fn test_game_loop_handles_junk_input() {
    let dictionary = words(&["cat", "dog"]);
    let input = "\n42\nzz\n?\nz\nz\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&dictionary, &settings(3, 5), &mut interface).unwrap();
}

#[test]
fn test_game_loop_loss_then_new_game() {
    let dictionary = words(&["cat", "dog"]);
    let input = "z\nq\nx\nnext\nz\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&dictionary, &settings(3, 2), &mut interface).unwrap();
}

#[test]
fn test_game_loop_ends_at_end_of_input() {
    let dictionary = words(&["cat", "dog"]);
    let mut interface = CliInterface::new(Cursor::new("c\n"));

    // Should stop without an explicit exit command
    game_loop(&dictionary, &settings(3, 5), &mut interface).unwrap();
}

#[test]
fn test_game_loop_no_words_of_length() {
    let dictionary = words(&["cat", "dog"]);
    let mut interface = CliInterface::new(Cursor::new("a\nnext\nexit\n"));

    game_loop(&dictionary, &settings(9, 5), &mut interface).unwrap();
}

#[test]
fn test_custom_dictionary_file_to_game() {
    // Load custom dictionary file -> play game
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("evil_hangman_test_dictionary.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Apple").unwrap();
        writeln!(file, "grape").unwrap();
        writeln!(file, "  lemon  ").unwrap();
        writeln!(file, "fig").unwrap();
        writeln!(file, "kiwi fruit").unwrap();
    }

    let dictionary = load_dictionary_from_file(&path).unwrap();
    assert_eq!(dictionary, words(&["apple", "grape", "lemon", "fig"]));
    assert_eq!(lengths_available(&dictionary), vec![3, 5]);

    let hangman = HangmanManager::new(&dictionary, 5, 6).unwrap();
    assert_eq!(hangman.candidates().len(), 3);

    let mut interface = CliInterface::new(Cursor::new("e\np\nexit\n"));
    game_loop(&dictionary, &settings(5, 6), &mut interface).unwrap();

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_full_reveal_in_single_word_dictionary() {
    let dictionary = words(&["noon"]);
    let mut hangman = HangmanManager::new(&dictionary, 4, 1).unwrap();

    assert_eq!(hangman.process_guess('n'), Ok(2));
    assert_eq!(hangman.current_pattern().unwrap(), "n - - n");
    assert_eq!(hangman.process_guess('o'), Ok(2));
    assert!(hangman.is_revealed());
    assert_eq!(hangman.remaining_guesses(), 1);
}

#[test]
fn test_partition_matches_manager_choice() {
    let dictionary = load_dictionary_from_str("ally\nbeta\ncool\ndeal\nelse\nflew\ngoal\nheal\n");
    let mut hangman = HangmanManager::new(&dictionary, 4, 5).unwrap();

    let groups = hangman.partition_by_letter('l');
    let biggest = groups.values().map(|g| g.len()).max().unwrap();
    let (expected_pattern, expected_words) = groups
        .iter()
        .find(|(_, g)| g.len() == biggest)
        .map(|(p, g)| (p.clone(), g.clone()))
        .unwrap();

    hangman.process_guess('l').unwrap();
    assert_eq!(hangman.pattern(), &expected_pattern);
    assert_eq!(hangman.candidates(), &expected_words);
}
