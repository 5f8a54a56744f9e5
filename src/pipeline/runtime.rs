use crate::pipeline::traits::{ChunkAligner, ChunkMerger, WordAligner};
use crate::types::{Chunk, Coverage, SentenceCaptions, Token};

/// Sentence-to-captions pipeline: word alignment followed by phrase merging,
/// plus direct alignment of caller-defined chunks.
///
/// Holds no mutable state; safe to share across tasks.
pub struct CaptionAligner {
    word_aligner: Box<dyn WordAligner>,
    merger: Box<dyn ChunkMerger>,
    chunk_aligner: Box<dyn ChunkAligner>,
    legacy_silent_drop: bool,
}

pub(crate) struct CaptionAlignerParts {
    pub word_aligner: Box<dyn WordAligner>,
    pub merger: Box<dyn ChunkMerger>,
    pub chunk_aligner: Box<dyn ChunkAligner>,
    pub legacy_silent_drop: bool,
}

impl CaptionAligner {
    pub(crate) fn from_parts(parts: CaptionAlignerParts) -> Self {
        Self {
            word_aligner: parts.word_aligner,
            merger: parts.merger,
            chunk_aligner: parts.chunk_aligner,
            legacy_silent_drop: parts.legacy_silent_drop,
        }
    }

    /// Align one authored sentence against its token stream and merge the
    /// result into display chunks.
    ///
    /// An exhausted timing source is not an error: the sentence comes back
    /// with whatever prefix could be timed and a `Partial` coverage tag
    /// (reported as `Complete` in legacy mode).
    pub fn caption_sentence(&self, sentence: &str, tokens: &[Token]) -> SentenceCaptions {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        if words.is_empty() {
            return SentenceCaptions {
                chunks: Vec::new(),
                coverage: Coverage::Complete,
            };
        }

        let alignment = self.word_aligner.align(&words, tokens);
        let mut coverage = alignment.coverage;
        if let Coverage::Partial { dropped_words } = coverage {
            tracing::warn!(
                dropped_words,
                word_count = words.len(),
                token_count = tokens.len(),
                "timing source exhausted before the sentence; trailing words dropped"
            );
            if self.legacy_silent_drop {
                coverage = Coverage::Complete;
            }
        }

        SentenceCaptions {
            chunks: self.merger.merge(&alignment.intervals),
            coverage,
        }
    }

    /// Align caller-defined chunks directly; always returns one chunk per
    /// input, synthesizing intervals when the token stream runs short.
    pub fn caption_chunks(&self, chunks: &[&str], tokens: &[Token]) -> Vec<Chunk> {
        self.chunk_aligner.align_chunks(chunks, tokens)
    }
}
