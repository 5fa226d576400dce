use std::num::NonZeroUsize;

use crate::tokenize::Granularity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreConfig {
    pub granularity: Granularity,
    /// Decimal places kept in reported percentages; `None` reports the raw ratio.
    pub round_digits: Option<u8>,
    /// Number of partial accumulators used by `score_parallel`.
    pub workers: usize,
}

impl ScoreConfig {
    pub const DEFAULT_ROUND_DIGITS: u8 = 4;

    pub fn word() -> Self {
        Self::default()
    }

    pub fn character() -> Self {
        Self::default().with_granularity(Granularity::Character)
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_round_digits(mut self, round_digits: Option<u8>) -> Self {
        self.round_digits = round_digits;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub(crate) fn finish(&self, value: f64) -> f64 {
        match self.round_digits {
            Some(digits) => round_to_digits(value, digits),
            None => value,
        }
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Word,
            round_digits: Some(Self::DEFAULT_ROUND_DIGITS),
            workers: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}

impl From<Granularity> for ScoreConfig {
    fn from(granularity: Granularity) -> Self {
        Self::default().with_granularity(granularity)
    }
}

pub fn round_to_digits(value: f64, digits: u8) -> f64 {
    let scale = 10f64.powi(i32::from(digits));
    (value * scale).round() / scale
}
