use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fastwer::transcript::read_parallel_transcripts;
use fastwer::{score_parallel, score_sentences, Granularity, ScoreConfig, ScoreError};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

/// Word or character error rate between a hypothesis and a reference transcript.
#[derive(Parser, Debug)]
#[command(name = "fastwer", version)]
struct Args {
    /// Hypothesis transcript, one utterance per line.
    #[arg(long)]
    hypo: PathBuf,

    /// Reference transcript, one utterance per line.
    #[arg(long = "ref")]
    reference: PathBuf,

    /// Score characters (CER) instead of words (WER).
    #[arg(long)]
    char_level: bool,

    /// Print one score per line instead of the corpus score.
    #[arg(long)]
    sentence: bool,

    /// Keep the trailing utterance-id column of each line.
    #[arg(long)]
    keep_utterance_id: bool,

    /// Decimal places in the reported percentage.
    #[arg(long, default_value_t = ScoreConfig::DEFAULT_ROUND_DIGITS)]
    digits: u8,

    /// Worker count for corpus scoring; defaults to available parallelism.
    #[arg(long)]
    workers: Option<usize>,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), ScoreError> {
    let (hypotheses, references) =
        read_parallel_transcripts(&args.hypo, &args.reference, !args.keep_utterance_id)?;

    let mut config = ScoreConfig::from(Granularity::from_char_level(args.char_level))
        .with_round_digits(Some(args.digits));
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }

    if args.sentence {
        for result in score_sentences(&hypotheses, &references, &config)? {
            match result {
                Ok(score) => println!("{score}"),
                Err(ScoreError::DegenerateCorpus) => println!("nan"),
                Err(err) => return Err(err),
            }
        }
        return Ok(());
    }

    let rt = Runtime::new().map_err(|e| ScoreError::Io {
        context: "starting async runtime",
        source: e,
    })?;
    let score = rt.block_on(score_parallel(hypotheses, references, config))?;
    println!("{score}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fastwer: {err}");
            ExitCode::FAILURE
        }
    }
}
