pub mod alignment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

pub use alignment::chunk_align::align_chunks;
pub use alignment::clip::project_to_clip;
pub use alignment::merge::{merge_natural, merge_short, ParticleTable};
pub use alignment::report::{
    aggregate_reports, compute_sentence_report, AggregateReport, Meta, Report, SentenceReport,
};
pub use alignment::word_align::align_words;
pub use config::{CaptionConfig, MergeStrategy};
pub use error::AlignError;
pub use pipeline::builder::CaptionAlignerBuilder;
pub use pipeline::runtime::CaptionAligner;
pub use pipeline::traits::{ChunkAligner, ChunkMerger, WordAligner};
pub use types::{AlignedInterval, Chunk, Coverage, SentenceCaptions, Token, WordAlignment};
