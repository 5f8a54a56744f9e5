use crate::alignment::chunk_align::align_chunks;
use crate::alignment::merge::{merge_natural, merge_short, ParticleTable};
use crate::alignment::word_align::align_words;
use crate::pipeline::traits::{ChunkAligner, ChunkMerger, WordAligner};
use crate::types::{AlignedInterval, Chunk, Token, WordAlignment};

/// Character-count greedy word aligner (the production default).
pub struct CharCountAligner;

impl WordAligner for CharCountAligner {
    fn align(&self, words: &[&str], tokens: &[Token]) -> WordAlignment {
        align_words(words, tokens)
    }
}

/// Length-only pairwise merger.
pub struct ShortWordMerger {
    pub max_chars: usize,
}

impl ChunkMerger for ShortWordMerger {
    fn merge(&self, intervals: &[AlignedInterval]) -> Vec<Chunk> {
        merge_short(intervals, self.max_chars)
    }
}

/// Korean-particle-aware pairwise merger.
pub struct NaturalPhraseMerger {
    pub max_chars: usize,
    pub particles: ParticleTable,
}

impl ChunkMerger for NaturalPhraseMerger {
    fn merge(&self, intervals: &[AlignedInterval]) -> Vec<Chunk> {
        merge_natural(intervals, &self.particles, self.max_chars)
    }
}

/// Pass-through merger: one chunk per aligned word.
pub struct NoMerge;

impl ChunkMerger for NoMerge {
    fn merge(&self, intervals: &[AlignedInterval]) -> Vec<Chunk> {
        intervals.iter().map(Chunk::from_interval).collect()
    }
}

/// Word-count-based custom-chunk aligner with synthetic fallback intervals.
pub struct CountingChunkAligner {
    pub fallback_secs: f64,
}

impl ChunkAligner for CountingChunkAligner {
    fn align_chunks(&self, chunks: &[&str], tokens: &[Token]) -> Vec<Chunk> {
        align_chunks(chunks, tokens, self.fallback_secs)
    }
}
