use crate::config::{CaptionConfig, MergeStrategy};
use crate::error::AlignError;
use crate::pipeline::defaults::{
    CharCountAligner, CountingChunkAligner, NaturalPhraseMerger, NoMerge, ShortWordMerger,
};
use crate::pipeline::runtime::{CaptionAligner, CaptionAlignerParts};
use crate::pipeline::traits::{ChunkAligner, ChunkMerger, WordAligner};

pub struct CaptionAlignerBuilder {
    config: CaptionConfig,
    word_aligner: Option<Box<dyn WordAligner>>,
    merger: Option<Box<dyn ChunkMerger>>,
    chunk_aligner: Option<Box<dyn ChunkAligner>>,
}

impl CaptionAlignerBuilder {
    pub fn new(config: CaptionConfig) -> Self {
        Self {
            config,
            word_aligner: None,
            merger: None,
            chunk_aligner: None,
        }
    }

    pub fn with_word_aligner(mut self, word_aligner: Box<dyn WordAligner>) -> Self {
        self.word_aligner = Some(word_aligner);
        self
    }

    pub fn with_merger(mut self, merger: Box<dyn ChunkMerger>) -> Self {
        self.merger = Some(merger);
        self
    }

    pub fn with_chunk_aligner(mut self, chunk_aligner: Box<dyn ChunkAligner>) -> Self {
        self.chunk_aligner = Some(chunk_aligner);
        self
    }

    pub fn build(self) -> Result<CaptionAligner, AlignError> {
        self.config.validate()?;

        let merger = match self.merger {
            Some(merger) => merger,
            None => default_merger(&self.config),
        };

        Ok(CaptionAligner::from_parts(CaptionAlignerParts {
            word_aligner: self.word_aligner.unwrap_or_else(|| Box::new(CharCountAligner)),
            merger,
            chunk_aligner: self.chunk_aligner.unwrap_or_else(|| {
                Box::new(CountingChunkAligner {
                    fallback_secs: self.config.fallback_chunk_secs,
                })
            }),
            legacy_silent_drop: self.config.legacy_silent_drop,
        }))
    }
}

fn default_merger(config: &CaptionConfig) -> Box<dyn ChunkMerger> {
    match config.merge_strategy {
        MergeStrategy::Short => Box::new(ShortWordMerger {
            max_chars: config.max_merge_chars,
        }),
        MergeStrategy::Natural => Box::new(NaturalPhraseMerger {
            max_chars: config.max_merge_chars,
            particles: config.particle_table(),
        }),
        MergeStrategy::None => Box::new(NoMerge),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AlignedInterval, Chunk, Coverage, Token, WordAlignment};

    struct FixedAligner;

    impl WordAligner for FixedAligner {
        fn align(&self, words: &[&str], _tokens: &[Token]) -> WordAlignment {
            WordAlignment {
                intervals: words
                    .iter()
                    .enumerate()
                    .map(|(i, w)| AlignedInterval::new(*w, i as f64, i as f64 + 1.0))
                    .collect(),
                coverage: Coverage::Complete,
            }
        }
    }

    #[test]
    fn build_succeeds_with_defaults() {
        let aligner = CaptionAlignerBuilder::new(CaptionConfig::default())
            .build()
            .expect("build should succeed");
        let tokens = vec![Token::new("밥을", 0.0, 0.5)];
        let out = aligner.caption_sentence("밥 을", &tokens);
        assert_eq!(out.coverage, Coverage::Complete);
    }

    #[test]
    fn build_rejects_invalid_config() {
        let config = CaptionConfig {
            fallback_chunk_secs: -1.0,
            ..CaptionConfig::default()
        };
        let result = CaptionAlignerBuilder::new(config).build();
        assert!(matches!(result, Err(AlignError::InvalidConfig { .. })));
    }

    #[test]
    fn custom_word_aligner_is_used() {
        let config = CaptionConfig {
            merge_strategy: MergeStrategy::None,
            ..CaptionConfig::default()
        };
        let aligner = CaptionAlignerBuilder::new(config)
            .with_word_aligner(Box::new(FixedAligner))
            .build()
            .expect("build should succeed");

        let out = aligner.caption_sentence("a b", &[]);
        assert_eq!(
            out.chunks,
            vec![Chunk::new("a", 0.0, 1.0), Chunk::new("b", 1.0, 2.0)]
        );
    }

    #[test]
    fn merge_strategy_none_keeps_one_chunk_per_word() {
        let config = CaptionConfig {
            merge_strategy: MergeStrategy::None,
            ..CaptionConfig::default()
        };
        let aligner = CaptionAlignerBuilder::new(config).build().expect("build");
        let tokens = vec![Token::new("ab", 0.0, 1.0)];
        let out = aligner.caption_sentence("a b", &tokens);
        assert_eq!(out.chunks.len(), 2);
    }
}
