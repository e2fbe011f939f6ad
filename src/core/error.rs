use thiserror::Error;

/// Construction and input errors raised by the pure behaviour models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("phrase list is empty")]
    NoPhrases,
    #[error("phrase {0} is empty")]
    EmptyPhrase(usize),
    #[error("lyric sheet is empty")]
    NoLyrics,
    #[error("lyric line {index} at {time}s is earlier than the line before it")]
    UnorderedLyrics { index: usize, time: f64 },
    #[error("media list for {0} mode is empty")]
    EmptyMediaList(&'static str),
    #[error("unknown gallery mode {0:?}")]
    UnknownMode(String),
}
