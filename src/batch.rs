use crate::proto::{File, Key};
use std::collections::BTreeSet;

/// An export batch is a wire `File`: one window, one region, a subset of keys.
pub type ExportBatch = File;

/// Splitting policy for export batches.
///
/// The default keeps every key of the hour in a single batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchPolicy {
    max_keys_per_file: Option<usize>,
}

impl BatchPolicy {
    pub fn unbounded() -> Self {
        Self { max_keys_per_file: None }
    }

    /// Cap every batch at `max` keys (at least 1).
    pub fn max_keys_per_file(max: usize) -> Self {
        Self { max_keys_per_file: Some(max.max(1)) }
    }

    pub fn ceiling(&self) -> Option<usize> {
        self.max_keys_per_file
    }
}

/// Partition `keys` into batches sharing `[start, end)` and `region`.
///
/// Batches are cut from the ordered key set, so each key lands in exactly one
/// batch and the output is deterministic. An empty key set still produces one
/// (empty) batch carrying the window metadata.
pub fn assemble(
    keys: BTreeSet<Key>,
    start_timestamp: i64,
    end_timestamp: i64,
    region: &str,
    policy: BatchPolicy,
) -> Vec<ExportBatch> {
    let ceiling = policy.ceiling().unwrap_or(usize::MAX);
    let make = |keys: Vec<Key>| File {
        start_timestamp,
        end_timestamp,
        region: region.to_string(),
        keys,
    };

    let mut batches = Vec::new();
    let mut current = Vec::new();
    for key in keys {
        if current.len() == ceiling {
            batches.push(make(std::mem::take(&mut current)));
        }
        current.push(key);
    }
    if !current.is_empty() || batches.is_empty() {
        batches.push(make(current));
    }
    batches
}
