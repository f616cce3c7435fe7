//! Hour-bucket selection over an unordered key collection.

use crate::date::{align_to_hour, Hour};
use crate::keys::DiagnosisKeyRecord;
use std::collections::BTreeSet;
use time::Date;

/// Records whose submission timestamp aligns to exactly `hour`. Pure filter;
/// input order is preserved and no match yields an empty vector.
pub fn select<'a, I>(records: I, hour: Hour) -> Vec<&'a DiagnosisKeyRecord>
where
    I: IntoIterator<Item = &'a DiagnosisKeyRecord>,
{
    records
        .into_iter()
        .filter(|r| hour.contains_hours_since_epoch(r.submission_timestamp()))
        .collect()
}

/// Distinct hours on `date` that have at least one submitted key.
pub fn hours_with_keys<'a, I>(records: I, date: Date) -> BTreeSet<Hour>
where
    I: IntoIterator<Item = &'a DiagnosisKeyRecord>,
{
    records
        .into_iter()
        .filter_map(|r| align_to_hour(r.submission_timestamp()))
        .filter(|start| start.date() == date)
        .filter_map(|start| Hour::from_datetime(start).ok())
        .collect()
}
