use crate::aggregator::hours_with_keys;
use crate::batch::BatchPolicy;
use crate::hour_file::HourFile;
use crate::keys::DiagnosisKeyRecord;
use crate::structure::Directory;
use crate::target::{Region, TargetHour};
use indicatif::ProgressBar;
use std::sync::Arc;
use time::Date;
use tracing::Span;

/// Settings shared by every hour node of one day.
#[derive(Clone, Debug)]
pub struct DayAssembly {
    pub region: Region,
    pub policy: BatchPolicy,
    pub progress: Option<ProgressBar>,
}

/// Number of hours on `date` that would get an artifact.
pub fn count_hours(keys: &[DiagnosisKeyRecord], date: Date) -> usize {
    hours_with_keys(keys.iter(), date).len()
}

/// Build `date/<YYYY-MM-DD>/hour/<H>/index` for every hour of `date` with at
/// least one submitted key. Hours without keys get no node.
///
/// The hour nodes are siblings under a parallel directory, so preparing the
/// tree computes up to 24 artifacts concurrently.
pub fn assemble_day(date: Date, keys: Arc<[DiagnosisKeyRecord]>, cfg: &DayAssembly, parent: &Span) -> Directory {
    let mut hour_dir = Directory::new("hour").parallel(true);
    for hour in hours_with_keys(keys.iter(), date) {
        let span = tracing::debug_span!(parent: parent, "hour_file", hour = %hour, region = %cfg.region);
        let mut file = HourFile::new(TargetHour::new(hour, cfg.region.clone()), Arc::clone(&keys), cfg.policy, span);
        if let Some(pb) = &cfg.progress {
            file = file.with_progress(pb.clone());
        }
        hour_dir.add(Box::new(Directory::new(hour.hour_of_day().to_string()).with_child(file)));
    }

    Directory::new("date").with_child(Directory::new(date.to_string()).with_child(hour_dir))
}
