//! Per-letter feedback status

use std::fmt;

/// Feedback for a single letter cell or keyboard key
///
/// Variants are ordered by how much they reveal about the target word:
/// `Empty < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Cell not yet evaluated
    #[default]
    Empty,
    /// Letter not in the target (after accounting for multiplicity)
    Absent,
    /// Letter in the target, but at another position
    Present,
    /// Letter at the right position
    Correct,
}

impl LetterStatus {
    /// Whether this status carries evaluation feedback
    #[inline]
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Square emoji used in shareable summaries
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '⬜',
        }
    }

    /// Short label used in the help overlay and plain output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
