use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ScoreError;

/// Reads one utterance per line.
///
/// Lines are trimmed. With `strip_utterance_id`, the last whitespace-separated
/// column (the `(speaker-utt)` id of `.trn` files) is dropped, so `"a b (u1)"`
/// becomes `"a b"`.
pub fn read_transcript<R: BufRead>(
    reader: R,
    strip_utterance_id: bool,
) -> Result<Vec<String>, ScoreError> {
    let mut lines = vec![];
    for line in reader.lines() {
        let line = line.map_err(|e| ScoreError::io("reading transcript line", e))?;
        lines.push(clean_line(&line, strip_utterance_id).to_string());
    }
    Ok(lines)
}

pub fn read_transcript_file(
    path: &Path,
    strip_utterance_id: bool,
) -> Result<Vec<String>, ScoreError> {
    let file = File::open(path).map_err(|e| ScoreError::io("opening transcript", e))?;
    let lines = read_transcript(BufReader::new(file), strip_utterance_id)?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "read transcript");
    Ok(lines)
}

/// Hypothesis and reference lists, checked to have the same number of lines.
pub fn read_parallel_transcripts(
    hyp_path: &Path,
    ref_path: &Path,
    strip_utterance_id: bool,
) -> Result<(Vec<String>, Vec<String>), ScoreError> {
    let hypotheses = read_transcript_file(hyp_path, strip_utterance_id)?;
    let references = read_transcript_file(ref_path, strip_utterance_id)?;
    if hypotheses.len() != references.len() {
        return Err(ScoreError::length_mismatch(
            hypotheses.len(),
            references.len(),
        ));
    }
    Ok((hypotheses, references))
}

fn clean_line(line: &str, strip_utterance_id: bool) -> &str {
    let line = line.trim();
    if !strip_utterance_id {
        return line;
    }
    match line.rfind(char::is_whitespace) {
        Some(idx) => line[..idx].trim_end(),
        None => "",
    }
}
