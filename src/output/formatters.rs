//! Formatting utilities for terminal output

use crate::game::{GamePhase, GameSession, MAX_ATTEMPTS};

/// Smallest bar drawn for a non-zero bucket, in percent of the full width
const MIN_BAR_PERCENT: usize = 10;

/// Shareable result: a `termo 3/6` line followed by one emoji row per guess
///
/// Returns `None` while the game is still being played.
#[must_use]
pub fn share_text(session: &GameSession) -> Option<String> {
    let score = match session.phase() {
        GamePhase::Playing => return None,
        GamePhase::Won => session.attempts().to_string(),
        GamePhase::Lost => "X".to_string(),
    };

    let mut text = format!("termo {score}/{MAX_ATTEMPTS}\n");
    for record in session.history() {
        text.push('\n');
        text.push_str(&record.evaluation.to_emoji());
    }
    Some(text)
}

/// Width of a distribution bar for `count` out of the largest bucket `max`
///
/// Bars scale to the largest bucket. Non-empty buckets never drop below a
/// tenth of `width` (and at least one column); empty ones have no bar.
#[must_use]
pub fn distribution_bar_width(count: u32, max: u32, width: usize) -> usize {
    if count == 0 || max == 0 || width == 0 {
        return 0;
    }
    let scaled = (count.min(max) as usize * width) / max as usize;
    let floor = (width * MIN_BAR_PERCENT).div_ceil(100).max(1);
    scaled.max(floor).min(width)
}

/// Text bar of `width` columns, `filled` of them solid
#[must_use]
pub fn bar(filled: usize, width: usize) -> String {
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn play(target: &str, guesses: &[&str]) -> GameSession {
        let mut session = GameSession::new(Word::new(target).unwrap());
        for guess in guesses {
            for c in guess.chars() {
                session.add_letter(c);
            }
            session.submit_row();
        }
        session
    }

    #[test]
    fn share_text_for_win() {
        let session = play("CARRO", &["NAVES", "CARRO"]);
        assert_eq!(
            share_text(&session).unwrap(),
            "termo 2/6\n\n⬛🟩⬛⬛⬛\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_text_for_loss() {
        let session = play(
            "CARRO",
            &["NAVES", "LIVRO", "PEDRA", "MUNDO", "TEMPO", "LUGAR"],
        );
        let text = share_text(&session).unwrap();
        assert!(text.starts_with("termo X/6\n"));
        assert_eq!(text.lines().count(), 2 + MAX_ATTEMPTS);
    }

    #[test]
    fn no_share_text_mid_game() {
        let session = play("CARRO", &["NAVES"]);
        assert_eq!(share_text(&session), None);
    }

    #[test]
    fn bars_scale_to_largest_bucket() {
        assert_eq!(distribution_bar_width(4, 4, 40), 40);
        assert_eq!(distribution_bar_width(2, 4, 40), 20);
        assert_eq!(distribution_bar_width(0, 4, 40), 0);
    }

    #[test]
    fn small_buckets_keep_minimum_width() {
        assert_eq!(distribution_bar_width(1, 100, 40), 4);
        assert_eq!(distribution_bar_width(1, 100, 5), 1);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(distribution_bar_width(3, 0, 40), 0);
        assert_eq!(distribution_bar_width(3, 3, 0), 0);
        assert_eq!(distribution_bar_width(9, 3, 10), 10);
    }

    #[test]
    fn text_bar() {
        assert_eq!(bar(0, 4), "░░░░");
        assert_eq!(bar(2, 4), "██░░");
        assert_eq!(bar(9, 4), "████");
    }
}
