use crate::config::ScoreConfig;
use crate::error::ScoreError;
use crate::tokenize::{Granularity, Sequence};

/// Edit count and reference length for one hypothesis/reference pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairStats {
    pub edits: usize,
    pub ref_tokens: usize,
}

impl PairStats {
    pub fn new(hyp: &Sequence<'_>, gold: &Sequence<'_>) -> Self {
        PairStats {
            edits: hyp.distance_to(gold),
            ref_tokens: gold.n_tokens,
        }
    }

    pub fn from_str(hyp: &str, gold: &str, granularity: Granularity) -> Self {
        let hyp_seq = Sequence::new(hyp, granularity);
        let gold_seq = Sequence::new(gold, granularity);
        PairStats::new(&hyp_seq, &gold_seq)
    }

    /// Unrounded percentage for this pair alone.
    pub fn error_rate(&self) -> Result<f64, ScoreError> {
        percentage(self.edits, self.ref_tokens)
    }
}

/// Running totals over a corpus. Partial accumulators from disjoint slices
/// can be merged in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusAccumulator {
    pub total_edits: usize,
    pub total_ref_tokens: usize,
    pub n_pairs: usize,
}

impl CorpusAccumulator {
    pub fn add(&mut self, stats: PairStats) {
        self.total_edits += stats.edits;
        self.total_ref_tokens += stats.ref_tokens;
        self.n_pairs += 1;
    }

    pub fn merge(&mut self, other: CorpusAccumulator) {
        self.total_edits += other.total_edits;
        self.total_ref_tokens += other.total_ref_tokens;
        self.n_pairs += other.n_pairs;
    }

    /// Micro-averaged, unrounded percentage.
    pub fn error_rate(&self) -> Result<f64, ScoreError> {
        percentage(self.total_edits, self.total_ref_tokens)
    }
}

fn percentage(edits: usize, ref_tokens: usize) -> Result<f64, ScoreError> {
    if ref_tokens == 0 {
        return Err(ScoreError::DegenerateCorpus);
    }
    Ok(100.0 * edits as f64 / ref_tokens as f64)
}

fn check_lengths(hypotheses: usize, references: usize) -> Result<(), ScoreError> {
    if hypotheses != references {
        return Err(ScoreError::length_mismatch(hypotheses, references));
    }
    Ok(())
}

fn accumulate_pairs<H: AsRef<str>, R: AsRef<str>>(
    hypotheses: &[H],
    references: &[R],
    granularity: Granularity,
) -> CorpusAccumulator {
    let mut acc = CorpusAccumulator::default();
    for (hyp, gold) in hypotheses.iter().zip(references) {
        acc.add(PairStats::from_str(hyp.as_ref(), gold.as_ref(), granularity));
    }
    acc
}

/// Corpus totals without computing a ratio.
pub fn accumulate<H: AsRef<str>, R: AsRef<str>>(
    hypotheses: &[H],
    references: &[R],
    granularity: impl Into<Granularity>,
) -> Result<CorpusAccumulator, ScoreError> {
    check_lengths(hypotheses.len(), references.len())?;
    Ok(accumulate_pairs(hypotheses, references, granularity.into()))
}

/// Corpus WER or CER in percent, rounded to four decimal places.
///
/// `granularity` also accepts a `char_level` flag. The i-th hypothesis is
/// scored against the i-th reference, and the result is
/// `100 * sum(edits) / sum(reference tokens)`.
pub fn score<H: AsRef<str>, R: AsRef<str>>(
    hypotheses: &[H],
    references: &[R],
    granularity: impl Into<Granularity>,
) -> Result<f64, ScoreError> {
    score_with(hypotheses, references, &ScoreConfig::from(granularity.into()))
}

pub fn score_with<H: AsRef<str>, R: AsRef<str>>(
    hypotheses: &[H],
    references: &[R],
    config: &ScoreConfig,
) -> Result<f64, ScoreError> {
    let acc = accumulate(hypotheses, references, config.granularity)?;
    tracing::debug!(
        pairs = acc.n_pairs,
        edits = acc.total_edits,
        ref_tokens = acc.total_ref_tokens,
        granularity = ?config.granularity,
        "scored corpus"
    );
    Ok(config.finish(acc.error_rate()?))
}

/// Error rate of a single pair.
pub fn score_sent(hyp: &str, gold: &str, config: &ScoreConfig) -> Result<f64, ScoreError> {
    let stats = PairStats::from_str(hyp, gold, config.granularity);
    Ok(config.finish(stats.error_rate()?))
}

/// One error rate per pair. A pair with an empty reference gets
/// `Err(DegenerateCorpus)` in its own slot; the other pairs are unaffected.
pub fn score_sentences<H: AsRef<str>, R: AsRef<str>>(
    hypotheses: &[H],
    references: &[R],
    config: &ScoreConfig,
) -> Result<Vec<Result<f64, ScoreError>>, ScoreError> {
    check_lengths(hypotheses.len(), references.len())?;
    let scores = hypotheses
        .iter()
        .zip(references)
        .enumerate()
        .map(|(idx, (hyp, gold))| {
            let result = score_sent(hyp.as_ref(), gold.as_ref(), config);
            if result.is_err() {
                tracing::warn!(pair = idx, "reference is empty; no error rate for this pair");
            }
            result
        })
        .collect();
    Ok(scores)
}

/// Same result as `score_with`, computed as `config.workers` partial
/// accumulators on the blocking pool and merged once at the end.
///
/// Must be awaited inside a tokio runtime.
pub async fn score_parallel(
    hypotheses: Vec<String>,
    references: Vec<String>,
    config: ScoreConfig,
) -> Result<f64, ScoreError> {
    check_lengths(hypotheses.len(), references.len())?;

    let chunk_size = hypotheses.len().div_ceil(config.workers.max(1)).max(1);
    let granularity = config.granularity;
    let mut hyp_iter = hypotheses.into_iter();
    let mut ref_iter = references.into_iter();
    let mut tasks = vec![];
    loop {
        let hyp_chunk: Vec<String> = hyp_iter.by_ref().take(chunk_size).collect();
        if hyp_chunk.is_empty() {
            break;
        }
        let ref_chunk: Vec<String> = ref_iter.by_ref().take(chunk_size).collect();
        tasks.push(tokio::task::spawn_blocking(move || {
            accumulate_pairs(&hyp_chunk, &ref_chunk, granularity)
        }));
    }
    tracing::debug!(tasks = tasks.len(), chunk_size, "dispatched scoring workers");

    let mut acc = CorpusAccumulator::default();
    for partial in futures::future::join_all(tasks).await {
        acc.merge(partial.map_err(ScoreError::worker)?);
    }
    Ok(config.finish(acc.error_rate()?))
}
