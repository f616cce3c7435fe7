//! Command-line surface of the `cwa-hourly` binary.

use crate::config::DistributionOptions;
use clap::Parser;
use std::path::PathBuf;
use time::macros::format_description;
use time::Date;

/// Build the hourly diagnosis-key artifacts of one UTC day.
#[derive(Debug, Parser)]
#[command(name = "cwa-hourly", version, about)]
pub struct Cli {
    /// NDJSON file with one diagnosis key per line.
    pub input: PathBuf,

    /// UTC day to build (YYYY-MM-DD).
    #[arg(value_parser = parse_date)]
    pub date: Date,

    /// Region code written into every export file.
    #[arg(long)]
    pub region: Option<String>,

    /// Root directory the `country/<region>` tree is written below.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Split an hour into several export files of at most this many keys.
    #[arg(long)]
    pub max_keys_per_file: Option<usize>,

    /// Worker threads used to prepare hours concurrently.
    #[arg(long)]
    pub parallelism: Option<usize>,

    /// Read buffer for the key input, in bytes.
    #[arg(long)]
    pub read_buffer_bytes: Option<usize>,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

pub fn parse_date(s: &str) -> Result<Date, String> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

impl Cli {
    /// Layer the flags given on the command line over `base`.
    pub fn apply(&self, mut opts: DistributionOptions) -> DistributionOptions {
        if let Some(region) = &self.region {
            opts = opts.with_region(region);
        }
        if let Some(dir) = &self.output_dir {
            opts = opts.with_output_dir(dir);
        }
        if self.max_keys_per_file.is_some() {
            opts = opts.with_max_keys_per_file(self.max_keys_per_file);
        }
        if let Some(n) = self.parallelism {
            opts = opts.with_parallelism(n);
        }
        if let Some(n) = self.read_buffer_bytes {
            opts = opts.with_io_read_buffer(n);
        }
        opts.with_progress(!self.no_progress)
    }
}
