use crate::types::{AlignedInterval, Chunk, Token, WordAlignment};

/// Maps authored words onto the timing-oracle token stream.
pub trait WordAligner: Send + Sync {
    fn align(&self, words: &[&str], tokens: &[Token]) -> WordAlignment;
}

/// Regroups per-word intervals into on-screen chunks.
pub trait ChunkMerger: Send + Sync {
    fn merge(&self, intervals: &[AlignedInterval]) -> Vec<Chunk>;
}

/// Aligns caller-defined multi-word chunks directly against the token stream.
pub trait ChunkAligner: Send + Sync {
    fn align_chunks(&self, chunks: &[&str], tokens: &[Token]) -> Vec<Chunk>;
}
