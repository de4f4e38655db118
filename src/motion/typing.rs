//! Typewriter effect cycling through a list of titles.

use super::{MotionConfig, MotionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePhase {
    Typing,
    PausedAtFull,
    Deleting,
}

/// Milliseconds between ticks in each phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub typing_ms: u64,
    pub deleting_ms: u64,
    pub pause_ms: u64,
}

impl From<&MotionConfig> for Cadence {
    fn from(config: &MotionConfig) -> Self {
        Self {
            typing_ms: config.typing_ms,
            deleting_ms: config.deleting_ms,
            pause_ms: config.pause_ms,
        }
    }
}

/// Types each title forward, holds it, deletes it faster, then moves on to
/// the next title, wrapping forever.
#[derive(Debug, Clone)]
pub struct TypeCycler {
    titles: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: TypePhase,
    cadence: Cadence,
}

impl TypeCycler {
    pub fn new<S: AsRef<str>>(titles: &[S], cadence: Cadence) -> Result<Self, MotionError> {
        if titles.is_empty() || titles.iter().any(|t| t.as_ref().is_empty()) {
            return Err(MotionError::NoTitles);
        }
        Ok(Self {
            titles: titles.iter().map(|t| t.as_ref().chars().collect()).collect(),
            index: 0,
            shown: 0,
            phase: TypePhase::Typing,
            cadence,
        })
    }

    pub fn text(&self) -> String {
        self.titles[self.index][..self.shown].iter().collect()
    }

    pub fn phase(&self) -> TypePhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// How long to wait before the next `tick`.
    pub fn delay(&self) -> u64 {
        match self.phase {
            TypePhase::Typing => self.cadence.typing_ms,
            TypePhase::PausedAtFull => self.cadence.pause_ms,
            TypePhase::Deleting => self.cadence.deleting_ms,
        }
    }

    /// Advance one step and return the delay until the following one.
    pub fn tick(&mut self) -> u64 {
        let full = self.titles[self.index].len();
        match self.phase {
            TypePhase::Typing => {
                if self.shown < full {
                    self.shown += 1;
                }
                if self.shown == full {
                    self.phase = TypePhase::PausedAtFull;
                }
            }
            TypePhase::PausedAtFull => self.phase = TypePhase::Deleting,
            TypePhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.titles.len();
                    self.phase = TypePhase::Typing;
                }
            }
        }
        self.delay()
    }
}
