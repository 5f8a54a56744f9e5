use crate::alignment::{round2, stripped_len};
use crate::types::{AlignedInterval, Coverage, Token, WordAlignment};

/// Map an authored word sequence onto an oracle token sequence by
/// character-count greedy matching.
///
/// The two streams use independent tokenizations: a token may cover several
/// authored words (merged syllables) and an authored word may be longer than
/// any single token. Phonetic alignment is overkill here; matching stripped
/// character counts is cheap and robust for caption purposes.
///
/// Each token's span is split into equal parts across the words matched to
/// it, boundaries rounded to 2 decimals. When the token stream runs out
/// before the words do, the trailing words receive no interval and the
/// result is tagged `Coverage::Partial`.
pub fn align_words(words: &[&str], tokens: &[Token]) -> WordAlignment {
    let mut intervals = Vec::with_capacity(words.len());
    let mut wi = 0usize;

    for token in tokens {
        if wi >= words.len() {
            break;
        }

        let target = stripped_len(&token.text);

        // Consume at least one word per token so a zero-length token text
        // cannot stall the word cursor.
        let mut run_end = wi + 1;
        let mut accumulated = stripped_len(words[wi]);
        while accumulated < target && run_end < words.len() {
            accumulated += stripped_len(words[run_end]);
            run_end += 1;
        }

        let run_len = run_end - wi;
        let part = (token.end - token.start) / run_len as f64;
        for k in 0..run_len {
            intervals.push(AlignedInterval {
                text: words[wi + k].to_string(),
                start: round2(token.start + k as f64 * part),
                end: round2(token.start + (k + 1) as f64 * part),
            });
        }
        wi = run_end;
    }

    let dropped_words = words.len() - wi;
    let coverage = if dropped_words == 0 {
        Coverage::Complete
    } else {
        Coverage::Partial { dropped_words }
    };

    WordAlignment {
        intervals,
        coverage,
    }
}
