pub mod config;
pub mod edit_distance;
pub mod error;
#[cfg(feature = "python")]
mod python;
pub mod score;
pub mod tokenize;
pub mod transcript;

// TODO: Expose per-pair substitution/deletion/insertion counts alongside the
//       edit total, for error-breakdown reports.

pub use config::ScoreConfig;
pub use edit_distance::edit_distance;
pub use error::ScoreError;
pub use score::{
    accumulate, score, score_parallel, score_sent, score_sentences, score_with,
    CorpusAccumulator, PairStats,
};
pub use tokenize::{Granularity, Sequence, Token};
