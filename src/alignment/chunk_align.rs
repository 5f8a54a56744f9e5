use crate::alignment::round2;
use crate::types::{Chunk, Token};

/// Seconds assigned to a chunk when the timing source has nothing left.
pub const DEFAULT_FALLBACK_CHUNK_SECS: f64 = 0.5;

/// Align caller-defined multi-word chunks directly against the token stream.
///
/// This aligner trusts chunk boundaries rather than character counts: each
/// chunk consumes as many tokens as it has whitespace-split words and spans
/// from the first consumed token's start to the last one's end. When the
/// stream is exhausted, a synthetic `fallback_secs` interval is appended
/// after the previous chunk (or after the stream's final end for the first
/// fallback), so the output always has one chunk per input.
pub fn align_chunks(chunks: &[&str], tokens: &[Token], fallback_secs: f64) -> Vec<Chunk> {
    let mut out: Vec<Chunk> = Vec::with_capacity(chunks.len());
    let mut ti = 0usize;

    for text in chunks {
        let remaining = &tokens[ti..];
        if remaining.is_empty() {
            let base = out
                .last()
                .map(|c| c.end)
                .or_else(|| tokens.last().map(|t| t.end))
                .unwrap_or(0.0);
            out.push(Chunk {
                text: (*text).to_string(),
                start: round2(base),
                end: round2(base + fallback_secs),
            });
            continue;
        }

        // Empty chunk text still consumes one token to keep the cursor moving.
        let wanted = text.split_whitespace().count().max(1);
        let take = wanted.min(remaining.len());
        out.push(Chunk {
            text: (*text).to_string(),
            start: remaining[0].start,
            end: remaining[take - 1].end,
        });
        ti += take;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str, start: f64, end: f64) -> Token {
        Token::new(text, start, end)
    }

    #[test]
    fn chunk_consumes_one_token_per_word() {
        let chunks = ["the quick fox", "jumps"];
        let tokens = vec![
            tok("the", 0.0, 0.2),
            tok("quick", 0.2, 0.5),
            tok("fox", 0.5, 0.8),
            tok("jumps", 0.8, 1.2),
        ];
        let out = align_chunks(&chunks, &tokens, DEFAULT_FALLBACK_CHUNK_SECS);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "the quick fox");
        assert_eq!(out[0].start, 0.0);
        assert_eq!(out[0].end, 0.8);
        assert_eq!(out[1].start, 0.8);
        assert_eq!(out[1].end, 1.2);
    }

    #[test]
    fn token_text_mismatch_is_ignored() {
        // Boundaries come from the chunk word counts, not from text quality.
        let chunks = ["two words"];
        let tokens = vec![tok("completely", 0.0, 0.5), tok("different", 0.5, 1.0)];
        let out = align_chunks(&chunks, &tokens, DEFAULT_FALLBACK_CHUNK_SECS);

        assert_eq!(out[0].start, 0.0);
        assert_eq!(out[0].end, 1.0);
    }

    #[test]
    fn exhausted_stream_synthesizes_fixed_intervals() {
        let chunks = ["first one", "second", "third"];
        let tokens = vec![tok("first", 0.0, 0.4), tok("one", 0.4, 0.9)];
        let out = align_chunks(&chunks, &tokens, DEFAULT_FALLBACK_CHUNK_SECS);

        assert_eq!(out.len(), 3);
        assert_eq!(out[0].end, 0.9);
        // First fallback starts at the stream's final end.
        assert_eq!(out[1].start, 0.9);
        assert_eq!(out[1].end, 1.4);
        assert_eq!(out[2].start, 1.4);
        assert_eq!(out[2].end, 1.9);
    }

    #[test]
    fn fallback_intervals_are_strictly_increasing() {
        let chunks = ["a", "b", "c", "d"];
        let out = align_chunks(&chunks, &[], DEFAULT_FALLBACK_CHUNK_SECS);

        assert_eq!(out.len(), 4);
        assert_eq!(out[0].start, 0.0);
        for pair in out.windows(2) {
            assert!(pair[1].start > pair[0].start);
            assert!(pair[1].start >= pair[0].end);
        }
    }

    #[test]
    fn short_tail_of_tokens_still_spans_chunk() {
        // Three words wanted, two tokens left: the remaining tokens carry it.
        let chunks = ["one two three"];
        let tokens = vec![tok("one", 0.0, 0.3), tok("two", 0.3, 0.6)];
        let out = align_chunks(&chunks, &tokens, DEFAULT_FALLBACK_CHUNK_SECS);

        assert_eq!(out[0].start, 0.0);
        assert_eq!(out[0].end, 0.6);
    }

    #[test]
    fn every_chunk_receives_an_interval() {
        let chunks = ["영상 속", "자막", "정렬은", "이렇게"];
        let tokens = vec![tok("영상", 0.0, 0.5)];
        let out = align_chunks(&chunks, &tokens, DEFAULT_FALLBACK_CHUNK_SECS);
        assert_eq!(out.len(), chunks.len());
    }

    #[test]
    fn custom_fallback_duration_respected() {
        let chunks = ["a", "b"];
        let out = align_chunks(&chunks, &[], 0.25);
        assert_eq!(out[0].end, 0.25);
        assert_eq!(out[1].start, 0.25);
        assert_eq!(out[1].end, 0.5);
    }
}
