//! Guess evaluation against the target word
//!
//! An evaluation assigns one [`LetterStatus`] to every position of a guess.
//! Duplicate letters are resolved the way the game shows them: exact matches
//! claim their target letter first, then displaced matches consume the
//! remaining copies left to right.

use super::{LetterStatus, WORD_LENGTH, Word};

/// Per-position feedback for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([LetterStatus; WORD_LENGTH]);

impl Evaluation {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Wrap raw statuses
    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Statuses in position order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert the evaluation to an emoji string such as "🟨🟩🟨⬛⬛"
    ///
    /// # Examples
    /// ```
    /// use termo::core::{Word, evaluate};
    ///
    /// let guess = Word::new("alloy").unwrap();
    /// let target = Word::new("llama").unwrap();
    /// assert_eq!(evaluate(&guess, &target).to_emoji(), "🟨🟩🟨⬛⬛");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

/// Evaluate `guess` against `target`
///
/// # Algorithm
/// 1. Every position starts as absent; a copy of the target letters is kept
/// 2. First pass: exact matches become correct and blank their target slot
/// 3. Second pass: each remaining position takes the leftmost unconsumed
///    target slot holding the same letter and becomes present
///
/// Both words are always five letters long, so the two inputs line up
/// position by position.
///
/// # Examples
/// ```
/// use termo::core::{LetterStatus, Word, evaluate};
///
/// let guess = Word::new("naves").unwrap();
/// let target = Word::new("carro").unwrap();
/// let evaluation = evaluate(&guess, &target);
///
/// assert_eq!(evaluation.status_at(1), LetterStatus::Correct);
/// assert_eq!(evaluation.count(LetterStatus::Absent), 4);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Evaluation {
    let mut result = [LetterStatus::Absent; WORD_LENGTH];
    let mut remaining: [Option<u8>; WORD_LENGTH] = target.letters().map(Some);

    // First pass: exact position matches
    // Allow: Index needed to compare guess[i] with remaining[i] and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.letter_at(i) == target.letter_at(i) {
            result[i] = LetterStatus::Correct;
            remaining[i] = None;
        }
    }

    // Second pass: displaced matches from what is left
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        let letter = guess.letter_at(i);
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
            result[i] = LetterStatus::Present;
            *slot = None;
        }
    }

    Evaluation(result)
}
