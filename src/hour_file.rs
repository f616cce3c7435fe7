//! The per-hour `index` artifact.
//!
//! An [`HourFile`] is built with the full key collection and does no work until
//! the traversal calls `prepare`. At that point it selects the keys submitted
//! during its hour, encodes and deduplicates them, packs them into export
//! batches and serializes one `FileBucket`. The bytes are computed at most once
//! and never change afterwards.

use crate::aggregator;
use crate::batch::{self, BatchPolicy};
use crate::encoder;
use crate::error::DistributionError;
use crate::keys::DiagnosisKeyRecord;
use crate::proto::FileBucket;
use crate::structure::{write_file_atomic, TraversalContext, Writable};
use crate::target::TargetHour;
use anyhow::Result;
use indicatif::ProgressBar;
use parking_lot::Mutex;
use prost::Message;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::Span;

/// Logical name the artifact is exposed under.
pub const INDEX_FILE_NAME: &str = "index";

pub struct HourFile {
    target: TargetHour,
    keys: Arc<[DiagnosisKeyRecord]>,
    policy: BatchPolicy,
    span: Span,
    progress: Option<ProgressBar>,
    bytes: OnceLock<Vec<u8>>,
    once: Mutex<()>,
}

impl HourFile {
    /// `span` is the node's logging collaborator; every event it emits is
    /// recorded inside it.
    pub fn new(target: TargetHour, keys: Arc<[DiagnosisKeyRecord]>, policy: BatchPolicy, span: Span) -> Self {
        Self {
            target,
            keys,
            policy,
            span,
            progress: None,
            bytes: OnceLock::new(),
            once: Mutex::new(()),
        }
    }

    /// Tick `pb` once when preparation completes.
    pub fn with_progress(mut self, pb: ProgressBar) -> Self {
        self.progress = Some(pb);
        self
    }

    pub fn target(&self) -> &TargetHour {
        &self.target
    }

    pub fn is_prepared(&self) -> bool {
        self.bytes.get().is_some()
    }

    /// The serialized `FileBucket`. Fails with `NotPrepared` until `prepare` has completed.
    pub fn bytes(&self) -> Result<&[u8], DistributionError> {
        self.bytes
            .get()
            .map(Vec::as_slice)
            .ok_or_else(|| DistributionError::NotPrepared { name: format!("{}/{}", self.target, INDEX_FILE_NAME) })
    }

    /// Compute and store the artifact. Later calls, including concurrent ones,
    /// are no-ops once a call has succeeded. A failed call stores nothing.
    pub fn prepare(&self, ctx: TraversalContext) -> Result<(), DistributionError> {
        if self.is_prepared() {
            return Ok(());
        }
        let _once = self.once.lock();
        if self.is_prepared() {
            return Ok(());
        }

        let _entered = self.span.enter();
        tracing::debug!(path = %ctx.child(INDEX_FILE_NAME), "creating hour file");
        let bytes = match self.create_hour_bytes() {
            Ok(b) => b,
            Err(e) => {
                tracing::error!(error = %e, "hour file aborted");
                return Err(e);
            }
        };
        // Guarded by `once`, so the cell is still empty here.
        let _ = self.bytes.set(bytes);

        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
        Ok(())
    }

    fn create_hour_bytes(&self) -> Result<Vec<u8>, DistributionError> {
        let hour = self.target.hour();
        let selected = aggregator::select(self.keys.iter(), hour);
        let keys = encoder::encode_all(selected.iter().copied())?;
        let key_count = keys.len();

        let files = batch::assemble(
            keys,
            hour.start_timestamp(),
            hour.end_timestamp(),
            self.target.region().as_str(),
            self.policy,
        );
        let bucket = FileBucket { files };
        let bytes = bucket.encode_to_vec();

        tracing::debug!(
            records = selected.len(),
            keys = key_count,
            files = bucket.files.len(),
            bytes = bytes.len(),
            "hour file created"
        );
        Ok(bytes)
    }
}

impl Writable for HourFile {
    fn name(&self) -> &str {
        INDEX_FILE_NAME
    }

    fn prepare(&self, ctx: TraversalContext) -> Result<(), DistributionError> {
        HourFile::prepare(self, ctx)
    }

    fn write(&self, parent: &Path) -> Result<()> {
        let bytes = self.bytes()?;
        write_file_atomic(parent, INDEX_FILE_NAME, bytes)?;
        Ok(())
    }
}
