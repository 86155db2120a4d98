//! The adversarial candidate manager.
//!
//! The manager never commits to a secret word. It keeps every dictionary word
//! that is still consistent with the guesses so far and, on each guess, splits
//! those words by the pattern they would reveal and keeps the largest group.

use crate::error::HangmanError;
use crate::{debug_log, info_log};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Marker for a position whose letter has not been revealed.
pub const UNKNOWN: char = '-';

/// A revealed/unrevealed letter layout.
///
/// Patterns order lexicographically by position, so [`UNKNOWN`] sorts before
/// every letter. That ordering drives tie-breaks during group selection.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Vec<char>);

impl Pattern {
    /// A pattern of `length` unknown positions.
    #[must_use]
    pub fn unknown(length: usize) -> Self {
        Self(vec![UNKNOWN; length])
    }

    #[must_use]
    pub fn cells(&self) -> &[char] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of positions showing `letter`.
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.0.iter().filter(|&&c| c == letter).count()
    }

    /// True when no position is still [`UNKNOWN`].
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        !self.0.contains(&UNKNOWN)
    }

    /// The pattern `word` would produce if it were the secret word and
    /// `guess` were guessed next.
    fn trial(&self, word: &str, guess: char) -> Self {
        Self(
            word.chars()
                .zip(self.0.iter())
                .map(|(w, &p)| if w == guess { guess } else { p })
                .collect(),
        )
    }
}

/// Positions are separated by a single space, e.g. `c a -`.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Candidate words grouped by the trial pattern they produce.
pub type Partition = BTreeMap<Pattern, BTreeSet<String>>;

/// Owns the evolving state of one game of adversarial hangman.
#[derive(Clone, Debug)]
pub struct HangmanManager {
    candidates: BTreeSet<String>,
    guessed: BTreeSet<char>,
    remaining: u32,
    pattern: Pattern,
}

impl HangmanManager {
    /// Start a game over the words of `dictionary` that are `length` chars
    /// long, allowing `max_guesses` wrong guesses.
    ///
    /// Words of other lengths are skipped. Returns
    /// [`HangmanError::InvalidConfiguration`] if `length` is zero or
    /// `max_guesses` is negative.
    pub fn new<I, S>(dictionary: I, length: usize, max_guesses: i32) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let remaining = match u32::try_from(max_guesses) {
            Ok(remaining) if length >= 1 => remaining,
            _ => {
                return Err(HangmanError::InvalidConfiguration {
                    length,
                    max_guesses,
                });
            }
        };

        let candidates: BTreeSet<String> = dictionary
            .into_iter()
            .filter(|word| word.as_ref().chars().count() == length)
            .map(|word| word.as_ref().to_string())
            .collect();
        info_log!(
            "HangmanManager::new() - {} candidates of length {}, {} guesses",
            candidates.len(),
            length,
            remaining
        );

        Ok(Self {
            candidates,
            guessed: BTreeSet::new(),
            remaining,
            pattern: Pattern::unknown(length),
        })
    }

    #[must_use]
    pub fn candidates(&self) -> &BTreeSet<String> {
        &self.candidates
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.pattern.len()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.pattern.is_revealed()
    }

    #[must_use]
    pub fn is_out_of_guesses(&self) -> bool {
        self.remaining == 0
    }

    /// The pattern for display, positions separated by spaces.
    ///
    /// Returns [`HangmanError::EmptyState`] once no candidates remain.
    pub fn current_pattern(&self) -> Result<String, HangmanError> {
        if self.candidates.is_empty() {
            return Err(HangmanError::EmptyState);
        }
        Ok(self.pattern.to_string())
    }

    /// Group the current candidates by the pattern each would reveal for
    /// `guess`. Every candidate lands in exactly one group.
    #[must_use]
    pub fn partition_by_letter(&self, guess: char) -> Partition {
        let mut groups = Partition::new();
        for word in &self.candidates {
            groups
                .entry(self.pattern.trial(word, guess))
                .or_default()
                .insert(word.clone());
        }
        debug_log!(
            "partition_by_letter('{}') - {} candidates in {} groups",
            guess,
            self.candidates.len(),
            groups.len()
        );
        groups
    }

    /// Record a guess and return how many positions it revealed.
    ///
    /// A guess revealing nothing costs one remaining guess. Rejected guesses
    /// leave the state untouched.
    pub fn process_guess(&mut self, letter: char) -> Result<usize, HangmanError> {
        if self.remaining < 1 || self.candidates.is_empty() {
            return Err(HangmanError::GameOver);
        }
        if self.guessed.contains(&letter) {
            return Err(HangmanError::DuplicateGuess(letter));
        }

        let partition = self.partition_by_letter(letter);
        if let Some((pattern, words)) = largest_group(partition) {
            self.pattern = pattern;
            self.candidates = words;
        }
        self.guessed.insert(letter);

        let occurrences = self.pattern.count(letter);
        if occurrences == 0 {
            self.remaining -= 1;
        }
        info_log!(
            "process_guess('{}') - pattern {}, {} candidates, {} occurrences, {} remaining",
            letter,
            self.pattern,
            self.candidates.len(),
            occurrences,
            self.remaining
        );
        Ok(occurrences)
    }
}

/// Pick the biggest group. Ties go to the group whose pattern sorts first.
fn largest_group(partition: Partition) -> Option<(Pattern, BTreeSet<String>)> {
    partition
        .into_iter()
        .fold(None, |best, (pattern, words)| {
            if best
                .as_ref()
                .is_none_or(|(_, kept): &(Pattern, BTreeSet<String>)| words.len() > kept.len())
            {
                Some((pattern, words))
            } else {
                best
            }
        })
}
