use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("hypothesis and reference lists differ in length: {hypotheses} vs {references}")]
    InputLengthMismatch { hypotheses: usize, references: usize },
    /// Every reference was empty, so the error rate has no denominator.
    #[error("reference token count is zero; error rate is undefined")]
    DegenerateCorpus,
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("scoring worker failed: {message}")]
    Worker { message: String },
}

impl ScoreError {
    pub(crate) fn length_mismatch(hypotheses: usize, references: usize) -> Self {
        Self::InputLengthMismatch {
            hypotheses,
            references,
        }
    }

    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn worker(err: impl std::fmt::Display) -> Self {
        Self::Worker {
            message: err.to_string(),
        }
    }
}
