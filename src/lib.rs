//! indexbench compares four text-search strategies over a corpus of short
//! review excerpts: a linear scan baseline, an inverted index, a character
//! trie, and a B-tree. For each strategy and query the harness reports the
//! matching records, the build+query wall-clock time, and the peak heap
//! delta over that span.
//!
//! Layer map:
//!
//! ```text
//! bench::harness  run_single / run_sweep / run_simulation
//!       │
//!       ├── corpus::loader     bounded JSON Lines reader
//!       ├── query              normalized Query + QueryKind
//!       ├── search             SearchEngine trait + the four engines
//!       │     ├── index::inverted   token -> roaring postings (+ fst prefix map)
//!       │     ├── index::trie       character trie, terminal id sets
//!       │     └── index::btree      ordered multi-way tree, range scans
//!       └── bench::probe       timing + peak-heap measurement
//!                └── memory::tracking   global counting allocator
//! ```

pub mod analysis;
pub mod bench;
pub mod core;
pub mod corpus;
pub mod index;
pub mod memory;
pub mod query;
pub mod search;

pub use crate::bench::harness::Harness;
pub use crate::bench::results::{BenchmarkResult, EngineOutcome, SimulationMatrix, SweepSeries};
pub use crate::core::config::Config;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{Corpus, Record, RecordId};
pub use crate::query::types::{Query, QueryKind};
pub use crate::search::{EngineKind, SearchEngine};

use crate::memory::tracking::TrackingAllocator;

// Every heap allocation in the process flows through the tracking
// allocator, which is what makes per-engine peak-memory deltas observable.
#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;
