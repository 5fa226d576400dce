use std::io::Cursor;

use fastwer::transcript::read_transcript;
use fastwer::{score, score_sentences, Granularity, ScoreConfig, ScoreError};

const HYPO_TRN: &str = "\
the cat sat on the mat (spk1-001)
a quick brown dog (spk1-002)
hello world (spk1-003)
";

const REF_TRN: &str = "\
the cat sat on a mat (spk1-001)
the quick brown fox (spk1-002)
hello world (spk1-003)
";

fn load() -> (Vec<String>, Vec<String>) {
    let hyps = read_transcript(Cursor::new(HYPO_TRN), true).unwrap();
    let refs = read_transcript(Cursor::new(REF_TRN), true).unwrap();
    (hyps, refs)
}

#[test]
fn corpus_wer_from_transcripts() {
    let (hyps, refs) = load();
    // 1 + 2 edits over 6 + 4 + 2 reference words
    let wer = score(&hyps, &refs, Granularity::Word).unwrap();
    assert_eq!(wer, 25.0);
}

#[test]
fn corpus_cer_from_transcripts() {
    let (hyps, refs) = load();
    // "the"->"a" and "a"->"the" are 3 edits each, "dog"->"fox" is 2.
    // Reference lengths: 20 + 19 + 11 characters, spaces included.
    let cer = score(&hyps, &refs, Granularity::Character).unwrap();
    assert_eq!(cer, 16.0);
}

#[test]
fn utterance_ids_would_inflate_error() {
    let hyps = read_transcript(Cursor::new("hello world (a-1)\n"), false).unwrap();
    let refs = read_transcript(Cursor::new("hello world (b-1)\n"), false).unwrap();
    let wer = score(&hyps, &refs, Granularity::Word).unwrap();
    assert!(wer > 0.0);
}

#[test]
fn per_sentence_scores() {
    let (hyps, refs) = load();
    let scores = score_sentences(&hyps, &refs, &ScoreConfig::word()).unwrap();
    let scores: Vec<f64> = scores.into_iter().map(|s| s.unwrap()).collect();
    assert_eq!(scores, vec![16.6667, 50.0, 0.0]);
}

#[test]
fn mismatched_transcripts() {
    let (mut hyps, refs) = load();
    hyps.pop();
    let err = score(&hyps, &refs, Granularity::Word).unwrap_err();
    assert!(matches!(err, ScoreError::InputLengthMismatch { .. }));
}
