use crate::batch::BatchPolicy;
use std::path::{Path, PathBuf};

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct DistributionOptions {
    pub region: String,                   // trimmed, case preserved
    pub output_dir: PathBuf,              // root the `country/<region>` tree is written below
    pub max_keys_per_file: Option<usize>, // None: one export file per hour
    pub parallelism: Option<usize>,       // Some(N) to set rayon threads, None to use default
    pub progress: bool,                   // show progress bar while preparing hours
    pub read_buffer_bytes: usize,         // BufReader capacity for key input
}

impl Default for DistributionOptions {
    fn default() -> Self {
        Self {
            region: "DE".to_string(),
            output_dir: PathBuf::from("./out"),
            max_keys_per_file: None,
            parallelism: None,
            progress: false,
            read_buffer_bytes: 256 * 1024,
        }
    }
}

impl DistributionOptions {
    pub fn with_region(mut self, region: impl AsRef<str>) -> Self {
        self.region = region.as_ref().trim().to_string();
        self
    }
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_max_keys_per_file(mut self, max: Option<usize>) -> Self {
        self.max_keys_per_file = max.map(|n| n.max(1));
        self
    }
    pub fn with_parallelism(mut self, threads: usize) -> Self {
        self.parallelism = Some(threads);
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_io_read_buffer(mut self, bytes: usize) -> Self {
        self.read_buffer_bytes = bytes.max(8 * 1024);
        self
    }

    pub fn batch_policy(&self) -> BatchPolicy {
        match self.max_keys_per_file {
            Some(n) => BatchPolicy::max_keys_per_file(n),
            None => BatchPolicy::unbounded(),
        }
    }

    /// Apply overrides from the environment:
    /// - DIST_REGION, DIST_OUTPUT_DIR
    /// - DIST_MAX_KEYS_PER_FILE (`0` or `none` disables splitting)
    /// - DIST_PARALLELISM, DIST_READ_BUFFER_BYTES
    /// - DIST_PROGRESS (`1`/`true`/`yes`)
    /// Malformed numbers are logged and ignored.
    pub fn merge_env(self) -> Self {
        self.merge_from(|name| std::env::var(name).ok())
    }

    /// Same as `merge_env`, reading variables through `lookup`.
    pub fn merge_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(region) = get("DIST_REGION") {
            self = self.with_region(region);
        }
        if let Some(dir) = get("DIST_OUTPUT_DIR") {
            self = self.with_output_dir(dir);
        }
        if let Some(raw) = get("DIST_MAX_KEYS_PER_FILE") {
            match raw.to_ascii_lowercase().as_str() {
                "0" | "none" => self.max_keys_per_file = None,
                s => match s.parse::<usize>() {
                    Ok(n) => self = self.with_max_keys_per_file(Some(n)),
                    Err(_) => tracing::warn!("DIST_MAX_KEYS_PER_FILE is not a number: {}", raw),
                },
            }
        }
        if let Some(raw) = get("DIST_PARALLELISM") {
            match raw.parse::<usize>() {
                Ok(n) => self = self.with_parallelism(n),
                Err(_) => tracing::warn!("DIST_PARALLELISM is not a number: {}", raw),
            }
        }
        if let Some(raw) = get("DIST_READ_BUFFER_BYTES") {
            match raw.parse::<usize>() {
                Ok(n) => self = self.with_io_read_buffer(n),
                Err(_) => tracing::warn!("DIST_READ_BUFFER_BYTES is not a number: {}", raw),
            }
        }
        if let Some(raw) = get("DIST_PROGRESS") {
            self.progress = matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        self
    }
}
