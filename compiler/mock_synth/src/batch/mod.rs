//! Batch synthesis over many interfaces.
//!
//! Each interface is synthesized independently. A failure is recorded next to
//! the contract it belongs to and never stops the rest of the batch. Parallel
//! runs collect results in input order, so their output is indistinguishable
//! from a sequential run.

use mock_ir::{ContractId, ContractTable, NamespaceGroup, SynthesizedTypePlan};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{group_by_namespace, synthesize_contract, SynthError};

/// How a batch is scheduled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Parallelism {
    Sequential,
    /// One rayon task per interface.
    #[default]
    Parallel,
}

/// A contract that could not be synthesized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchFailure {
    pub contract: ContractId,
    pub error: SynthError,
}

/// Plans and failures of one batch, each in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub plans: Vec<SynthesizedTypePlan>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Group the successful plans by namespace, keeping the failures.
    pub fn into_groups(self) -> (Vec<NamespaceGroup>, Vec<BatchFailure>) {
        (group_by_namespace(self.plans), self.failures)
    }
}

/// Synthesize every contract in `ids`.
pub fn synthesize_all(
    table: &ContractTable,
    ids: &[ContractId],
    parallelism: Parallelism,
) -> BatchOutcome {
    let results = match parallelism {
        Parallelism::Sequential => run_sequential(table, ids),
        Parallelism::Parallel => run_parallel(table, ids),
    };

    let mut outcome = BatchOutcome::default();
    for (contract, result) in results {
        match result {
            Ok(plan) => outcome.plans.push(plan),
            Err(error) => {
                warn!(%error, "skipping contract");
                outcome.failures.push(BatchFailure { contract, error });
            }
        }
    }
    debug!(
        plans = outcome.plans.len(),
        failures = outcome.failures.len(),
        "batch finished"
    );
    outcome
}

/// Synthesize every interface in the table, in declaration order.
pub fn synthesize_interfaces(table: &ContractTable, parallelism: Parallelism) -> BatchOutcome {
    synthesize_all(table, &table.interfaces(), parallelism)
}

type BatchResult = (ContractId, Result<SynthesizedTypePlan, SynthError>);

fn run_sequential(table: &ContractTable, ids: &[ContractId]) -> Vec<BatchResult> {
    ids.iter()
        .map(|&id| (id, synthesize_contract(table, id)))
        .collect()
}

fn run_parallel(table: &ContractTable, ids: &[ContractId]) -> Vec<BatchResult> {
    // Scoped pool, torn down before returning.
    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                ids.par_iter()
                    .map(|&id| (id, synthesize_contract(table, id)))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            warn!("failed to create thread pool ({e}), running sequentially");
            run_sequential(table, ids)
        })
}
