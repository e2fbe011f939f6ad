// Typing effect state machine.
//
// The engine never touches timers itself: each call to [`TypingEngine::tick`]
// performs one transition and reports how long the driver should wait before
// calling it again.

use super::constants::{DELETE_CHAR_MS, PAUSE_AFTER_DELETE_MS, PAUSE_AFTER_TYPE_MS, TYPE_CHAR_MS};
use super::error::CoreError;

/// Phase the engine is in *after* a tick; it determines what the next tick does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    PauseAfterType,
    Deleting,
    PauseAfterDelete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimings {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_after_type_ms: u32,
    pub pause_after_delete_ms: u32,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_ms: TYPE_CHAR_MS,
            delete_ms: DELETE_CHAR_MS,
            pause_after_type_ms: PAUSE_AFTER_TYPE_MS,
            pause_after_delete_ms: PAUSE_AFTER_DELETE_MS,
        }
    }
}

/// Result of one tick: the text to display and the delay until the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

pub struct TypingEngine {
    phrases: Vec<Vec<char>>,
    timings: TypingTimings,
    phrase_index: usize,
    char_count: usize,
    phase: TypingPhase,
}

impl TypingEngine {
    pub fn new<S: AsRef<str>>(phrases: &[S], timings: TypingTimings) -> Result<Self, CoreError> {
        if phrases.is_empty() {
            return Err(CoreError::NoPhrases);
        }
        let phrases = phrases
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let chars: Vec<char> = p.as_ref().chars().collect();
                if chars.is_empty() {
                    Err(CoreError::EmptyPhrase(i))
                } else {
                    Ok(chars)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            phrases,
            timings,
            phrase_index: 0,
            char_count: 0,
            phase: TypingPhase::Typing,
        })
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Text currently on screen.
    pub fn text(&self) -> String {
        self.phrases[self.phrase_index][..self.char_count]
            .iter()
            .collect()
    }

    pub fn tick(&mut self) -> TypingFrame {
        let len = self.phrases[self.phrase_index].len();
        let delay_ms = match self.phase {
            TypingPhase::Typing | TypingPhase::PauseAfterDelete => {
                self.char_count += 1;
                if self.char_count >= len {
                    self.char_count = len;
                    self.phase = TypingPhase::PauseAfterType;
                    self.timings.pause_after_type_ms
                } else {
                    self.phase = TypingPhase::Typing;
                    self.timings.type_ms
                }
            }
            TypingPhase::Deleting | TypingPhase::PauseAfterType => {
                self.char_count = self.char_count.saturating_sub(1);
                if self.char_count == 0 {
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    self.phase = TypingPhase::PauseAfterDelete;
                    self.timings.pause_after_delete_ms
                } else {
                    self.phase = TypingPhase::Deleting;
                    self.timings.delete_ms
                }
            }
        };
        TypingFrame {
            text: self.text(),
            delay_ms,
        }
    }
}
