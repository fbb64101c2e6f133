//! Session statistics
//!
//! Statistics live behind [`StatsStore`], the "record a finished game, get the
//! updated aggregate back" contract. [`SessionStats`] keeps them in memory for
//! the lifetime of the process.

use super::MAX_ATTEMPTS;

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Solved on attempt `attempts` (1-6)
    Won { attempts: usize },
    Lost,
}

/// Aggregate statistics snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_percentage: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins per attempt count, index 0 = solved on the first guess
    pub guess_distribution: [u32; MAX_ATTEMPTS],
}

impl Stats {
    /// Largest distribution bucket, used to scale bars
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.guess_distribution.iter().copied().max().unwrap_or(0)
    }
}

/// Records finished games and reports the aggregate
pub trait StatsStore {
    /// Record a finished game and return the updated aggregate
    fn record(&mut self, outcome: GameOutcome) -> Stats;

    /// Current aggregate
    fn snapshot(&self) -> Stats;
}

/// In-memory statistics for one process
#[derive(Debug, Default, Clone)]
pub struct SessionStats {
    stats: Stats,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsStore for SessionStats {
    fn record(&mut self, outcome: GameOutcome) -> Stats {
        let stats = &mut self.stats;
        stats.games_played += 1;

        match outcome {
            GameOutcome::Won { attempts } => {
                stats.wins += 1;
                let bucket = attempts.clamp(1, MAX_ATTEMPTS) - 1;
                stats.guess_distribution[bucket] += 1;
                stats.current_streak += 1;
                stats.max_streak = stats.max_streak.max(stats.current_streak);
            }
            GameOutcome::Lost => {
                stats.losses += 1;
                stats.current_streak = 0;
            }
        }

        stats.win_percentage =
            ((f64::from(stats.wins) * 100.0) / f64::from(stats.games_played)).round() as u32;

        self.stats.clone()
    }

    fn snapshot(&self) -> Stats {
        self.stats.clone()
    }
}
