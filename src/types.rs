use serde::{Deserialize, Serialize};

/// One recognized unit from the speech-timing oracle.
///
/// Tokens arrive ordered by `start` ascending; their boundaries need not
/// match the authored sentence's word boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Seconds. Interval is [start, end]; `start <= end`, zero length allowed.
    pub start: f64,
    pub end: f64,
}

impl Token {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// A single authored word bound to a derived time interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedInterval {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl AlignedInterval {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// One or more words joined by single spaces, displayed as one caption unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl Chunk {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    pub(crate) fn from_interval(interval: &AlignedInterval) -> Self {
        Self {
            text: interval.text.clone(),
            start: interval.start,
            end: interval.end,
        }
    }
}

/// How much of the authored sentence received timing.
///
/// The greedy aligner stops when the timing source runs out; any trailing
/// authored words then carry no interval. That condition is surfaced here
/// instead of being silently swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Coverage {
    Complete,
    Partial { dropped_words: usize },
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        matches!(self, Coverage::Complete)
    }
}

/// Output of the per-word alignment step.
#[derive(Debug, Clone, PartialEq)]
pub struct WordAlignment {
    pub intervals: Vec<AlignedInterval>,
    pub coverage: Coverage,
}

/// Final caption units for one sentence, ready for the downstream scheduler.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceCaptions {
    pub chunks: Vec<Chunk>,
    pub coverage: Coverage,
}
