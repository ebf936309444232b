//! The merge loop.
//!
//! [`Trainer`] owns every piece of mutable state of a run: the symbol stream,
//! the pair histogram, the vocabulary and the id counter. Each [`step`]
//! selects the most frequent pair, compacts the stream if it has become too
//! sparse, and rewrites every occurrence of the pair in a single pass.
//!
//! # Example
//!
//! ```
//! use bytepair_rs::{Trainer, TrainerConfig, StopReason};
//!
//! let mut trainer = Trainer::new(b"ababab", TrainerConfig::default()).unwrap();
//! let mut checkpoints: Vec<Vec<u16>> = Vec::new();
//! let summary = trainer.run(&mut checkpoints).unwrap();
//!
//! assert_eq!(trainer.tokens(), vec![257, 256]);
//! assert_eq!(summary.stop_reason, StopReason::NoRepeatedPair);
//! assert_eq!(
//!     trainer.vocabulary().expand_all(trainer.tokens()).unwrap(),
//!     b"ababab".to_vec()
//! );
//! ```
//!
//! [`step`]: Trainer::step

use crate::checkpoint::CheckpointSink;
use crate::config::TrainerConfig;
use crate::error::Result;
use crate::histogram::PairHistogram;
use crate::id_gen::IdGenerator;
use crate::pair::Pair;
use crate::stream::SymbolStream;
use crate::symbol::Symbol;
use crate::vocab::Vocabulary;
use crate::walker::PairWalker;
use log::{debug, info, warn};
use std::fmt;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The input had fewer than two symbols, so there was never a pair.
    Degenerate,
    /// No pair occurs more than once; merging further gains nothing.
    NoRepeatedPair,
    /// The configured merge cap was reached.
    MergeCap,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StopReason::Degenerate => "input too short to contain a pair",
            StopReason::NoRepeatedPair => "no pair occurs more than once",
            StopReason::MergeCap => "merge cap reached",
        };
        f.write_str(text)
    }
}

/// One completed merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRecord {
    /// 1-based step number.
    pub step: usize,
    pub pair: Pair,
    /// Histogram count of the pair when it was selected.
    pub frequency: usize,
    /// The symbol that replaced it.
    pub symbol: Symbol,
    /// Occurrences actually rewritten. Can be below `frequency` when
    /// occurrences overlap, as in a run of identical symbols.
    pub replaced: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Merged(MergeRecord),
    Stopped(StopReason),
}

/// Statistics about a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainSummary {
    /// Number of input bytes
    pub input_length: usize,
    /// Number of tokens in the final stream
    pub token_count: usize,
    /// Merges performed (equals the number of vocabulary entries)
    pub merges: usize,
    pub stop_reason: StopReason,
    /// Times the stream was compacted
    pub compactions: usize,
    /// Intermediate checkpoints that could not be written
    pub failed_checkpoints: usize,
}

impl TrainSummary {
    /// Returns the final token count as a percentage of the input length.
    ///
    /// Lower is better. 100% means no compression.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_length == 0 {
            0.0
        } else {
            (self.token_count as f64 / self.input_length as f64) * 100.0
        }
    }
}

/// Exclusive owner of all state of a training run.
pub struct Trainer {
    config: TrainerConfig,
    stream: SymbolStream,
    histogram: PairHistogram,
    vocab: Vocabulary,
    id_gen: IdGenerator,
    input_length: usize,
    steps: usize,
    compactions: usize,
}

impl Trainer {
    /// Prepares a run over `input`, building the initial pair histogram.
    pub fn new(input: &[u8], config: TrainerConfig) -> Result<Self> {
        config.validate()?;

        let stream = SymbolStream::from_bytes(input);
        let histogram = PairHistogram::build(&stream);
        debug!(
            "initial histogram: {} distinct pairs over {} symbols",
            histogram.len(),
            stream.live_len()
        );

        Ok(Self {
            config,
            stream,
            histogram,
            vocab: Vocabulary::new(),
            id_gen: IdGenerator::new(),
            input_length: input.len(),
            steps: 0,
            compactions: 0,
        })
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn stream(&self) -> &SymbolStream {
        &self.stream
    }

    pub fn histogram(&self) -> &PairHistogram {
        &self.histogram
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Consumes the trainer, keeping only the learned vocabulary.
    pub fn into_vocabulary(self) -> Vocabulary {
        self.vocab
    }

    /// Merges performed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The current live token sequence. Does not modify the stream.
    pub fn tokens(&self) -> Vec<Symbol> {
        self.stream.tokens().collect()
    }

    /// Performs one selection / compaction / merge step.
    pub fn step(&mut self) -> Result<StepOutcome> {
        let Some(selection) = self.histogram.select() else {
            let reason = if self.steps == 0 {
                StopReason::Degenerate
            } else {
                StopReason::NoRepeatedPair
            };
            return Ok(StepOutcome::Stopped(reason));
        };

        if selection.frequency <= 1 {
            return Ok(StepOutcome::Stopped(StopReason::NoRepeatedPair));
        }
        if self.steps >= self.config.max_merges {
            return Ok(StepOutcome::Stopped(StopReason::MergeCap));
        }

        // `total` is the live pair count, one less than the live symbol count
        if (selection.total as f64) < self.stream.len() as f64 * self.config.compaction_threshold
        {
            let removed = self.stream.compact();
            self.compactions += 1;
            debug!(
                "compacted stream: removed {} holes, {} symbols remain",
                removed,
                self.stream.len()
            );
        }

        let symbol = self.id_gen.get()?;
        let step = self.steps + 1;

        if step % self.config.progress_interval == 0 {
            info!(
                "step {}: n={} {} -> {}",
                step, selection.frequency, selection.pair, symbol
            );
        }

        let replaced = self.replace_pair(selection.pair, symbol);
        self.histogram.clear(&selection.pair);
        self.vocab.push(symbol, selection.pair);
        self.steps = step;
        debug_assert_eq!(self.steps, self.id_gen.issued());

        Ok(StepOutcome::Merged(MergeRecord {
            step,
            pair: selection.pair,
            frequency: selection.frequency,
            symbol,
            replaced,
        }))
    }

    /// Rewrites every non-overlapping occurrence of `pair`, left to right.
    ///
    /// For each occurrence the two boundary pairs are moved in the histogram:
    /// `(before, pair.left)` becomes `(before, symbol)` and `(pair.right, after)`
    /// becomes `(symbol, after)`. The count for `pair` itself is left to the
    /// caller to clear.
    fn replace_pair(&mut self, pair: Pair, symbol: Symbol) -> usize {
        let stream = &mut self.stream;
        let histogram = &mut self.histogram;

        let mut walker = PairWalker::new(stream);
        let mut replaced = 0;

        while let Some((left, right)) = walker.next(stream) {
            if stream.get(left) != Some(pair.left) || stream.get(right) != Some(pair.right) {
                continue;
            }

            stream.merge_at(left, right, symbol);
            let neighbors = walker.resync(stream, left);

            if let Some(before) = neighbors.before.and_then(|pos| stream.get(pos)) {
                histogram.decrement(Pair::new(before, pair.left));
                histogram.increment(Pair::new(before, symbol));
            }
            if let Some(after) = neighbors.after.and_then(|pos| stream.get(pos)) {
                histogram.decrement(Pair::new(pair.right, after));
                histogram.increment(Pair::new(symbol, after));
            }

            replaced += 1;
        }

        replaced
    }

    fn checkpoint<S: CheckpointSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        let tokens = self.tokens();
        sink.write(&tokens)?;
        debug!("checkpoint after step {}: {} tokens", self.steps, tokens.len());
        Ok(())
    }

    /// Runs merge steps until a stop condition, checkpointing along the way.
    ///
    /// A failed intermediate checkpoint is logged and counted but does not
    /// stop the run. The final checkpoint must succeed.
    pub fn run<S: CheckpointSink + ?Sized>(&mut self, sink: &mut S) -> Result<TrainSummary> {
        let mut failed_checkpoints = 0;

        let stop_reason = loop {
            match self.step()? {
                StepOutcome::Stopped(reason) => break reason,
                StepOutcome::Merged(record) => {
                    if record.step % self.config.checkpoint_interval == 0 {
                        if let Err(e) = self.checkpoint(sink) {
                            warn!("checkpoint at step {} failed: {}", record.step, e);
                            failed_checkpoints += 1;
                        }
                    }
                }
            }
        };

        info!("stopped after {} merges: {}", self.steps, stop_reason);
        self.checkpoint(sink)?;

        Ok(TrainSummary {
            input_length: self.input_length,
            token_count: self.stream.live_len(),
            merges: self.steps,
            stop_reason,
            compactions: self.compactions,
            failed_checkpoints,
        })
    }
}
