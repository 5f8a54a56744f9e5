pub mod chunk_align;
pub mod clip;
pub mod merge;
pub mod report;
pub mod word_align;

/// Character count with internal whitespace removed.
///
/// Both authored words and oracle tokens are measured this way so that a
/// token spanning several authored words compares against their combined
/// visible length.
pub(crate) fn stripped_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Timing boundaries are reported to 2 decimal places (centisecond grid).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
