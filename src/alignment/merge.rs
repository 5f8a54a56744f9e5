use serde::{Deserialize, Serialize};

use crate::types::{AlignedInterval, Chunk};

/// Maximum trimmed character count for a word to take part in a pairwise merge.
pub const DEFAULT_MAX_MERGE_CHARS: usize = 6;

/// Postpositional particles that close off the word they attach to.
///
/// Membership is fixed for compatibility with existing caption output; callers
/// needing a different inventory construct their own [`ParticleTable`].
pub const DEFAULT_PARTICLES: [&str; 17] = [
    "을", "를", "이", "가", "은", "는", "에", "에서", "으로", "와", "과", "도", "만", "부터",
    "까지", "처럼", "보다",
];

/// Configurable inventory of postpositional grammatical particles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticleTable {
    particles: Vec<String>,
}

impl Default for ParticleTable {
    fn default() -> Self {
        Self::new(DEFAULT_PARTICLES.iter().copied())
    }
}

impl ParticleTable {
    pub fn new<I, S>(particles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            particles: particles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_particle(&self, text: &str) -> bool {
        self.particles.iter().any(|p| p == text)
    }

    pub fn ends_with_particle(&self, text: &str) -> bool {
        self.particles.iter().any(|p| text.ends_with(p.as_str()))
    }
}

/// Merge adjacent short words into two-word chunks.
///
/// Single greedy left-to-right pass: a pair merges when both trimmed texts
/// are at most `max_chars` characters, otherwise the current interval is
/// emitted alone. Merged chunks are never reconsidered; a trailing unpaired
/// interval always stands alone.
pub fn merge_short(intervals: &[AlignedInterval], max_chars: usize) -> Vec<Chunk> {
    merge_pairwise(intervals, |cur, next| {
        within_limit(cur, max_chars) && within_limit(next, max_chars)
    })
}

/// Merge adjacent words with Korean-aware phrase rules.
///
/// Pairwise decision, in order:
/// 1. a comma in either word blocks the merge (clause boundary);
/// 2. a word ending in a particle is already complete and closes its chunk;
/// 3. a bare particle attaches to the preceding word unconditionally;
/// 4. otherwise the short-word rule of [`merge_short`] applies.
pub fn merge_natural(
    intervals: &[AlignedInterval],
    table: &ParticleTable,
    max_chars: usize,
) -> Vec<Chunk> {
    merge_pairwise(intervals, |cur, next| {
        if cur.contains(',') || next.contains(',') {
            return false;
        }
        let cur = cur.trim();
        let next = next.trim();
        if table.ends_with_particle(cur) {
            return false;
        }
        if table.is_particle(next) {
            return true;
        }
        char_len(cur) <= max_chars && char_len(next) <= max_chars
    })
}

fn merge_pairwise<F>(intervals: &[AlignedInterval], mergeable: F) -> Vec<Chunk>
where
    F: Fn(&str, &str) -> bool,
{
    let mut chunks = Vec::with_capacity(intervals.len());
    let mut i = 0usize;
    while i < intervals.len() {
        let cur = &intervals[i];
        if i + 1 < intervals.len() {
            let next = &intervals[i + 1];
            if mergeable(&cur.text, &next.text) {
                chunks.push(Chunk {
                    text: format!("{} {}", cur.text, next.text),
                    start: cur.start,
                    end: next.end,
                });
                i += 2;
                continue;
            }
        }
        chunks.push(Chunk::from_interval(cur));
        i += 1;
    }
    chunks
}

fn within_limit(text: &str, max_chars: usize) -> bool {
    char_len(text.trim()) <= max_chars
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
