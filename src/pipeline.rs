use crate::config::DistributionOptions;
use crate::hours::{assemble_day, count_hours, DayAssembly};
use crate::keys::DiagnosisKeyRecord;
use crate::ndjson::load_keys;
use crate::progress::make_count_progress;
use crate::structure::{Directory, TraversalContext, Writable};
use crate::target::Region;
use crate::util::init_tracing_once;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use time::Date;

/// Builds, prepares and writes the hourly key artifacts of a region.
#[derive(Clone, Default)]
pub struct HourlyDistribution {
    pub(crate) opts: DistributionOptions,
}

impl HourlyDistribution {
    pub fn new() -> Self {
        Self { opts: DistributionOptions::default() }
    }

    pub fn from_options(opts: DistributionOptions) -> Self {
        Self { opts }
    }

    // -------- Builder methods --------
    pub fn region(mut self, region: impl AsRef<str>) -> Self { self.opts = self.opts.with_region(region); self }
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_output_dir(dir); self }
    pub fn max_keys_per_file(mut self, max: Option<usize>) -> Self { self.opts = self.opts.with_max_keys_per_file(max); self }
    pub fn parallelism(mut self, threads: usize) -> Self { self.opts = self.opts.with_parallelism(threads); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }

    pub fn options(&self) -> &DistributionOptions {
        &self.opts
    }

    /// The unprepared `country/<REGION>` tree for `date`.
    pub fn build_day(&self, date: Date, keys: Arc<[DiagnosisKeyRecord]>) -> Result<Directory> {
        self.build_tree(date, keys, None)
    }

    fn build_tree(&self, date: Date, keys: Arc<[DiagnosisKeyRecord]>, progress: Option<ProgressBar>) -> Result<Directory> {
        let region = Region::new(&self.opts.region)?;
        let span = tracing::info_span!("distribution", region = %region, date = %date);

        let cfg = DayAssembly { region: region.clone(), policy: self.opts.batch_policy(), progress };
        let day = assemble_day(date, keys, &cfg, &span);

        Ok(Directory::new("country").with_child(Directory::new(region.as_str()).with_child(day)))
    }

    /// Build, prepare and write the tree for `date`. Returns the written root.
    pub fn run_day(&self, date: Date, keys: Arc<[DiagnosisKeyRecord]>) -> Result<PathBuf> {
        init_tracing_once();
        if let Some(n) = self.opts.parallelism { if n > 0 { rayon::ThreadPoolBuilder::new().num_threads(n).build_global().ok(); } }

        let pb = if self.opts.progress {
            Some(make_count_progress(count_hours(&keys, date) as u64, "Hour files"))
        } else {
            None
        };
        let tree = self.build_tree(date, keys, pb.clone())?;
        tree.prepare(TraversalContext::root())
            .with_context(|| format!("preparing {} for {}", self.opts.region, date))?;

        fs::create_dir_all(&self.opts.output_dir)
            .with_context(|| format!("create dir {}", self.opts.output_dir.display()))?;
        tree.write(&self.opts.output_dir)?;
        if let Some(pb) = pb { pb.finish_with_message("Hour files written"); }

        let root = self.opts.output_dir.join(tree.name());
        tracing::info!("Wrote hour artifacts for {} on {} below {}", self.opts.region, date, root.display());
        Ok(root)
    }

    /// `run_day` over keys loaded from an NDJSON file.
    pub fn run_day_from_ndjson(&self, date: Date, input: &Path) -> Result<PathBuf> {
        init_tracing_once();
        let keys = load_keys(input, self.opts.read_buffer_bytes)?;
        if keys.is_empty() {
            tracing::warn!("No diagnosis keys in {}", input.display());
        }
        self.run_day(date, keys.into())
    }
}
