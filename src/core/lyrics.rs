// Lyric reveal synced to audio playback time.
//
// `on_time_update` is fed the media element's current time whenever the
// browser reports progress; `reveal_tick` is driven by a timer while a line is
// being typed out.

use super::constants::LYRIC_CHAR_MS;
use super::error::CoreError;

#[derive(Clone, Debug, PartialEq)]
pub struct LyricLine {
    pub time_sec: f64,
    pub text: String,
}

/// What a reveal tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// A character was appended; tick again after `delay_ms`.
    Typed { delay_ms: u32 },
    /// The line is complete and the cursor moved on.
    Finished,
    /// No reveal was in progress.
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Reveal {
    line: usize,
    shown_chars: usize,
}

pub struct LyricPlayer {
    lines: Vec<LyricLine>,
    cursor: usize,
    reveal: Option<Reveal>,
    displayed: String,
    char_delay_ms: u32,
}

impl LyricPlayer {
    pub fn new(lines: Vec<LyricLine>) -> Result<Self, CoreError> {
        if lines.is_empty() {
            return Err(CoreError::NoLyrics);
        }
        for (i, pair) in lines.windows(2).enumerate() {
            if pair[1].time_sec < pair[0].time_sec {
                return Err(CoreError::UnorderedLyrics {
                    index: i + 1,
                    time: pair[1].time_sec,
                });
            }
        }
        Ok(Self {
            lines,
            cursor: 0,
            reveal: None,
            displayed: String::new(),
            char_delay_ms: LYRIC_CHAR_MS,
        })
    }

    pub fn from_pairs(pairs: &[(f64, &str)]) -> Result<Self, CoreError> {
        Self::new(
            pairs
                .iter()
                .map(|(t, text)| LyricLine {
                    time_sec: *t,
                    text: (*text).to_string(),
                })
                .collect(),
        )
    }

    /// Index of the next line that has not been fully shown.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Starts revealing the next line when playback has reached it and no
    /// reveal is running. Returns `true` when a reveal started; the caller
    /// should then drive `reveal_tick` immediately. At most one line starts
    /// per update, so a seek past several lines catches up one at a time.
    pub fn on_time_update(&mut self, current_time_sec: f64) -> bool {
        if self.reveal.is_some() {
            return false;
        }
        let Some(next) = self.lines.get(self.cursor) else {
            return false;
        };
        if current_time_sec < next.time_sec {
            return false;
        }
        self.displayed.clear();
        self.reveal = Some(Reveal {
            line: self.cursor,
            shown_chars: 0,
        });
        true
    }

    pub fn reveal_tick(&mut self) -> RevealStep {
        let Some(reveal) = self.reveal.as_mut() else {
            return RevealStep::Idle;
        };
        let text = &self.lines[reveal.line].text;
        match text.chars().nth(reveal.shown_chars) {
            Some(c) => {
                self.displayed.push(c);
                reveal.shown_chars += 1;
                RevealStep::Typed {
                    delay_ms: self.char_delay_ms,
                }
            }
            None => {
                self.cursor = reveal.line + 1;
                self.reveal = None;
                RevealStep::Finished
            }
        }
    }
}
