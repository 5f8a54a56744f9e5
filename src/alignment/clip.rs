use crate::types::Chunk;

/// Translate globally-timed chunks onto one video segment's local timeline.
///
/// `local = global - clip_start`. Chunks whose local start falls outside
/// `[0, clip_duration)` are dropped; a local end past the clip's duration is
/// clamped to it. This is the contract the downstream caption scheduler
/// relies on.
pub fn project_to_clip(chunks: &[Chunk], clip_start: f64, clip_duration: f64) -> Vec<Chunk> {
    chunks
        .iter()
        .filter_map(|chunk| {
            let local_start = chunk.start - clip_start;
            if local_start < 0.0 || local_start >= clip_duration {
                return None;
            }
            let local_end = (chunk.end - clip_start).min(clip_duration);
            Some(Chunk {
                text: chunk.text.clone(),
                start: local_start,
                end: local_end,
            })
        })
        .collect()
}
