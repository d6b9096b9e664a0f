use std::sync::mpsc;
use std::thread;

use tracing::{info, warn};

use crate::config::CorpusConfig;
use crate::errors::{CorpusError, CorpusResult};
use crate::sampler::{Sampler, hash_seed};

/// Result of one requested sample.
#[derive(Debug)]
pub enum SampleOutcome {
    Generated { index: usize, text: String },
    Failed { index: usize, error: CorpusError },
}

impl SampleOutcome {
    pub fn index(&self) -> usize {
        match self {
            SampleOutcome::Generated { index, .. } | SampleOutcome::Failed { index, .. } => *index,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            SampleOutcome::Generated { text, .. } => Some(text),
            SampleOutcome::Failed { .. } => None,
        }
    }
}

/// Seed of worker `worker` for a run seeded with `seed`.
///
/// Worker 0 uses the run seed itself, so a single-worker run reproduces
/// `Sampler::new` with the same configuration.
pub fn worker_seed(seed: u64, worker: usize) -> u64 {
    if worker == 0 {
        seed
    } else {
        hash_seed(seed, &format!("worker-{worker}"))
    }
}

/// Generates `count` samples on `workers` threads.
///
/// Every worker loads its own corpus instance on its own thread; no worker
/// draws a sample until all of them loaded, so configuration errors abort the
/// run up front. Index `i` is assigned to worker `i % workers`; outcomes come
/// back over a channel and are returned ordered by index. For a fixed seed
/// and worker count the output is stable.
pub fn generate_samples(
    config: &CorpusConfig,
    count: usize,
    workers: usize,
) -> CorpusResult<Vec<SampleOutcome>> {
    let workers = workers.clamp(1, count.max(1));
    let (tx, rx) = mpsc::channel();
    let (load_tx, load_rx) = mpsc::channel::<(usize, CorpusResult<()>)>();

    let load_error = thread::scope(|scope| {
        let mut gates = Vec::with_capacity(workers);
        for worker in 0..workers {
            let (gate_tx, gate_rx) = mpsc::channel::<bool>();
            gates.push(gate_tx);
            let load_tx = load_tx.clone();
            let tx = tx.clone();
            scope.spawn(move || {
                let seed = worker_seed(config.seed, worker);
                let mut sampler = match Sampler::with_seed(config, seed) {
                    Ok(sampler) => {
                        let _ = load_tx.send((worker, Ok(())));
                        sampler
                    }
                    Err(error) => {
                        let _ = load_tx.send((worker, Err(error)));
                        return;
                    }
                };
                drop(load_tx);

                if !gate_rx.recv().unwrap_or(false) {
                    return;
                }
                for index in (worker..count).step_by(workers) {
                    let outcome = match sampler.get_sample() {
                        Ok(text) => SampleOutcome::Generated { index, text },
                        Err(error) => SampleOutcome::Failed { index, error },
                    };
                    if tx.send(outcome).is_err() {
                        break;
                    }
                }
            });
        }
        drop(load_tx);

        let mut loads: Vec<(usize, CorpusResult<()>)> = load_rx.iter().collect();
        loads.sort_by_key(|(worker, _)| *worker);
        let load_error = loads.into_iter().find_map(|(_, result)| result.err());

        let go = load_error.is_none();
        if go {
            info!(mode = %config.mode, count, workers, "sample generation started");
        }
        for gate in &gates {
            let _ = gate.send(go);
        }
        load_error
    });
    drop(tx);

    if let Some(error) = load_error {
        return Err(error);
    }

    let mut outcomes: Vec<SampleOutcome> = rx.into_iter().collect();
    outcomes.sort_by_key(SampleOutcome::index);

    let failed = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, SampleOutcome::Failed { .. }))
        .count();
    if failed > 0 {
        warn!(failed, count, "some samples could not be generated");
    }
    info!(generated = count - failed, "sample generation finished");
    Ok(outcomes)
}
