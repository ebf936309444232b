//! # bytepair - Byte-Pair Encoding Vocabulary Training
//!
//! Trains a BPE vocabulary from a raw byte stream by repeatedly replacing the
//! most frequent pair of adjacent symbols with a new symbol, until no pair
//! occurs more than once.
//!
//! The merge engine works in place on a flat array:
//! 1. **Holes**: a merge rewrites the left slot of each occurrence and marks the
//!    right slot as a hole; traversals skip holes lazily
//! 2. **Incremental histogram**: pair counts are built once, then kept exact by
//!    local deltas at the two boundaries of every replaced occurrence
//! 3. **Compaction**: holes are squeezed out whenever the live fraction of the
//!    array drops below a threshold
//!
//! ## Example
//!
//! ```
//! use bytepair_rs::{Trainer, TrainerConfig};
//!
//! let input = b"abcabcabcabc";
//! let mut trainer = Trainer::new(input, TrainerConfig::default()).unwrap();
//! let summary = trainer.run(&mut Vec::<Vec<u16>>::new()).unwrap();
//!
//! // The vocabulary expands the final tokens back into the input
//! let expanded = trainer.vocabulary().expand_all(trainer.tokens()).unwrap();
//! assert_eq!(expanded, input.to_vec());
//!
//! println!("{} merges, {} tokens", summary.merges, summary.token_count);
//! ```
//!
//! ## Performance
//!
//! - Each merge costs one pass over the array plus O(1) histogram work per
//!   replaced occurrence
//! - Compaction keeps total traversal work at O(n log n) in the input length
//! - Vocabulary entries are stored as child pairs, so memory is linear in the
//!   number of merges

mod checkpoint;
mod config;
pub mod corpus;
mod error;
mod histogram;
mod id_gen;
mod pair;
mod stream;
mod symbol;
mod trainer;
mod vocab;
mod walker;


pub use checkpoint::{decode_tokens, CheckpointSink, FileCheckpoint, OUTPUT_SUFFIX};
pub use config::{
    TrainerConfig, DEFAULT_CHECKPOINT_INTERVAL, DEFAULT_COMPACTION_THRESHOLD,
    DEFAULT_MAX_MERGES, DEFAULT_PROGRESS_INTERVAL, MAX_MERGES_LIMIT,
};
pub use error::{Error, Result};
pub use histogram::{PairHistogram, Selection};
pub use pair::Pair;
pub use stream::{LiveCursor, SymbolStream};
pub use symbol::{is_byte, Slot, Symbol, FIRST_SYNTHETIC};
pub use trainer::{MergeRecord, StepOutcome, StopReason, TrainSummary, Trainer};
pub use vocab::Vocabulary;
pub use walker::{Neighbors, PairWalker};
