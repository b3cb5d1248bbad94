use std::collections::BTreeMap;
use std::path::Path;

use crate::bench::probe;
use crate::bench::results::{
    BenchmarkResult, EngineOutcome, SimulationCell, SimulationMatrix, SweepSeries,
};
use crate::core::config::Config;
use crate::core::error::{ErrorKind, Result};
use crate::core::types::{Corpus, Record};
use crate::corpus::loader;
use crate::query::types::{Query, QueryKind};
use crate::search::EngineKind;

/// Drives all four engines uniformly. Engines run strictly one after
/// another so the memory probe attributes allocation to exactly one engine.
pub struct Harness {
    config: Config,
}

impl Harness {
    pub fn new(config: Config) -> Self {
        Harness { config }
    }

    pub fn with_defaults() -> Self {
        Harness::new(Config::default())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load one corpus and run every engine against one query. A blank
    /// query or unreadable dataset aborts the call; a per-engine failure
    /// (e.g. fuzzy on the trie) is recorded and the rest still run.
    pub fn run_single(
        &self,
        dataset_path: &Path,
        query: &str,
        limit: usize,
        kind: QueryKind,
    ) -> Result<BTreeMap<String, EngineOutcome>> {
        let query = Query::parse(query, kind)?;
        let corpus = loader::load(dataset_path, limit, &self.config.text_field)?;

        let mut report = BTreeMap::new();
        for engine_kind in EngineKind::ALL {
            let outcome = match self.run_engine(engine_kind, &corpus, &query, limit) {
                Ok(result) => EngineOutcome::Completed(result),
                Err(e) => EngineOutcome::Failed {
                    error: e.to_string(),
                },
            };
            report.insert(engine_kind.name().to_string(), outcome);
        }

        Ok(report)
    }

    /// Repeat single-query mode once per limit, producing a per-engine
    /// duration series (the empirical growth curve). Failed cells are None.
    pub fn run_sweep(
        &self,
        dataset_path: &Path,
        query: &str,
        limits: &[usize],
        kind: QueryKind,
    ) -> Result<SweepSeries> {
        Query::parse(query, kind)?;

        let mut series: SweepSeries = EngineKind::ALL
            .iter()
            .map(|k| (k.name().to_string(), Vec::with_capacity(limits.len())))
            .collect();

        for &limit in limits {
            let report = self.run_single(dataset_path, query, limit, kind)?;
            for engine_kind in EngineKind::ALL {
                let point = report
                    .get(engine_kind.name())
                    .and_then(EngineOutcome::result)
                    .map(|r| r.elapsed);
                if let Some(timings) = series.get_mut(engine_kind.name()) {
                    timings.push(point);
                }
            }
        }

        Ok(series)
    }

    /// Full cross-product of canned queries and limits, exact semantics.
    /// A cell whose query fails validation becomes a row of nulls; only an
    /// unreadable dataset aborts the whole simulation.
    pub fn run_simulation(
        &self,
        dataset_path: &Path,
        queries: &[String],
        limits: &[usize],
    ) -> Result<SimulationMatrix> {
        let mut matrix = SimulationMatrix::new();

        for raw_query in queries {
            let mut per_query = BTreeMap::new();
            for &limit in limits {
                let cells =
                    match self.run_single(dataset_path, raw_query, limit, QueryKind::Exact) {
                        Ok(report) => report
                            .into_iter()
                            .map(|(name, outcome)| {
                                let cell = outcome.result().map(|r| SimulationCell {
                                    elapsed: r.elapsed,
                                    peak_memory: r.peak_memory,
                                });
                                (name, cell)
                            })
                            .collect(),
                        Err(e) if e.kind == ErrorKind::DatasetUnreadable => return Err(e),
                        Err(e) => {
                            eprintln!(
                                "Warning: simulation cell failed for query '{}' limit {}: {}",
                                raw_query, limit, e
                            );
                            EngineKind::ALL
                                .iter()
                                .map(|k| (k.name().to_string(), None))
                                .collect()
                        }
                    };
                per_query.insert(limit, cells);
            }
            matrix.insert(raw_query.clone(), per_query);
        }

        Ok(matrix)
    }

    /// Simulation over the configured canned queries and limits.
    pub fn run_default_simulation(&self, dataset_path: &Path) -> Result<SimulationMatrix> {
        self.run_simulation(
            dataset_path,
            &self.config.simulation_queries,
            &self.config.simulation_limits,
        )
    }

    fn run_engine(
        &self,
        kind: EngineKind,
        corpus: &Corpus,
        query: &Query,
        limit: usize,
    ) -> Result<BenchmarkResult> {
        let config = &self.config;
        let (ids, elapsed, peak_memory) = probe::measure(|| {
            let mut engine = kind.create(config);
            engine.build(corpus)?;
            engine.query(corpus, query, limit)
        })?;

        let matches: Vec<Record> = ids
            .iter()
            .filter_map(|id| corpus.get(*id))
            .cloned()
            .collect();

        Ok(BenchmarkResult {
            matches,
            elapsed,
            peak_memory,
        })
    }
}
