//! Evaluate a single guess against a chosen target

use crate::core::{Evaluation, Word, WordError, evaluate};

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub evaluation: Evaluation,
}

/// Parse both words and evaluate `guess` against `target`
///
/// # Errors
///
/// Returns [`WordError`] if either word is not five ASCII letters.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let evaluation = evaluate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    #[test]
    fn repeated_letters() {
        let result = check_guess("llama", "alloy").unwrap();
        assert_eq!(
            result.evaluation.statuses(),
            &[Present, Correct, Present, Absent, Absent]
        );
        assert_eq!(result.guess.text(), "LLAMA");
    }

    #[test]
    fn rejects_bad_words() {
        assert_eq!(check_guess("carr", "carro"), Err(WordError::InvalidLength(4)));
        assert!(check_guess("carro", "ca1ro").is_err());
    }
}
