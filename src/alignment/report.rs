use serde::Serialize;

use crate::types::{Chunk, Coverage, SentenceCaptions};

const EPS_DURATION_SEC: f64 = 0.001;

/// Report over a batch of captioned sentences.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub schema_version: u32,
    pub meta: Meta,
    pub sentences: Vec<SentenceReport>,
    pub aggregates: AggregateReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub generated_at: String,
    pub merge_strategy: String,
    pub case_count: usize,
}

/// Structural quality of one sentence's caption chunks.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceReport {
    pub id: String,
    pub word_count: u32,
    pub chunk_count: u32,
    pub dropped_words: u32,
    pub zero_width_chunk_count: u32,
    pub overlap_chunk_count: u32,
    pub total_caption_secs: f64,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    pub sentence_count: u32,
    pub partial_sentence_count: u32,
    pub total_dropped_words: u32,
    pub total_zero_width_chunks: u32,
    pub total_overlap_chunks: u32,
}

pub fn compute_sentence_report(
    id: &str,
    sentence: &str,
    captions: &SentenceCaptions,
) -> SentenceReport {
    let dropped_words = match captions.coverage {
        Coverage::Complete => 0,
        Coverage::Partial { dropped_words } => dropped_words as u32,
    };

    let zero_width_chunk_count = captions
        .chunks
        .iter()
        .filter(|c| (c.end - c.start).abs() < EPS_DURATION_SEC)
        .count() as u32;
    let overlap_chunk_count = count_overlaps(&captions.chunks);
    let total_caption_secs = captions
        .chunks
        .iter()
        .map(|c| (c.end - c.start).max(0.0))
        .sum::<f64>();

    let mut notes = Vec::new();
    if dropped_words > 0 {
        notes.push(format!(
            "{dropped_words} trailing word(s) received no timing"
        ));
    }
    if zero_width_chunk_count > 0 {
        notes.push(format!("{zero_width_chunk_count} zero-width chunk(s)"));
    }

    SentenceReport {
        id: id.to_string(),
        word_count: sentence.split_whitespace().count() as u32,
        chunk_count: captions.chunks.len() as u32,
        dropped_words,
        zero_width_chunk_count,
        overlap_chunk_count,
        total_caption_secs,
        notes,
    }
}

pub fn aggregate_reports(sentences: &[SentenceReport]) -> AggregateReport {
    AggregateReport {
        sentence_count: sentences.len() as u32,
        partial_sentence_count: sentences.iter().filter(|s| s.dropped_words > 0).count() as u32,
        total_dropped_words: sentences.iter().map(|s| s.dropped_words).sum(),
        total_zero_width_chunks: sentences.iter().map(|s| s.zero_width_chunk_count).sum(),
        total_overlap_chunks: sentences.iter().map(|s| s.overlap_chunk_count).sum(),
    }
}

fn count_overlaps(chunks: &[Chunk]) -> u32 {
    chunks
        .windows(2)
        .filter(|pair| pair[1].start < pair[0].end - EPS_DURATION_SEC)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Chunk;

    fn captions(chunks: Vec<Chunk>, coverage: Coverage) -> SentenceCaptions {
        SentenceCaptions { chunks, coverage }
    }

    #[test]
    fn complete_sentence_has_no_notes() {
        let c = captions(
            vec![
                Chunk::new("go now", 0.0, 0.4),
                Chunk::new("quickly", 0.4, 1.0),
            ],
            Coverage::Complete,
        );
        let report = compute_sentence_report("s1", "go now quickly", &c);

        assert_eq!(report.word_count, 3);
        assert_eq!(report.chunk_count, 2);
        assert_eq!(report.dropped_words, 0);
        assert_eq!(report.overlap_chunk_count, 0);
        assert!(report.notes.is_empty());
        assert!((report.total_caption_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn partial_coverage_and_zero_width_noted() {
        let c = captions(
            vec![Chunk::new("one", 0.5, 0.5)],
            Coverage::Partial { dropped_words: 2 },
        );
        let report = compute_sentence_report("s2", "one two three", &c);

        assert_eq!(report.dropped_words, 2);
        assert_eq!(report.zero_width_chunk_count, 1);
        assert_eq!(report.notes.len(), 2);
    }

    #[test]
    fn aggregates_sum_over_sentences() {
        let a = compute_sentence_report(
            "a",
            "x y",
            &captions(vec![Chunk::new("x y", 0.0, 0.5)], Coverage::Complete),
        );
        let b = compute_sentence_report(
            "b",
            "x y z",
            &captions(
                vec![Chunk::new("x", 0.0, 0.2)],
                Coverage::Partial { dropped_words: 2 },
            ),
        );
        let agg = aggregate_reports(&[a, b]);

        assert_eq!(agg.sentence_count, 2);
        assert_eq!(agg.partial_sentence_count, 1);
        assert_eq!(agg.total_dropped_words, 2);
    }

    #[test]
    fn overlapping_chunks_detected() {
        let c = captions(
            vec![Chunk::new("a", 0.0, 0.6), Chunk::new("b", 0.4, 0.9)],
            Coverage::Complete,
        );
        let report = compute_sentence_report("s3", "a b", &c);
        assert_eq!(report.overlap_chunk_count, 1);
    }
}
