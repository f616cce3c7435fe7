#![allow(dead_code)]

use cwa_hourly::proto::{FileBucket, Key};
use cwa_hourly::{DiagnosisKeyRecord, Hour, Region, TargetHour};
use prost::Message;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use time::macros::date;
use time::Date;
use walkdir::WalkDir;

/// The day every fixture lives on.
pub const DAY: Date = date!(2020 - 06 - 01);

/// Hours since epoch at midnight of `DAY`.
pub const DAY_START_HOURS: i64 = 441_936;

/// Hour `h` of `DAY`.
pub fn hour(h: u8) -> Hour {
    Hour::from_hours_since_epoch(DAY_START_HOURS + i64::from(h)).unwrap()
}

/// Hours-since-epoch of hour `h` of `DAY` (what the submission service stores).
pub fn submitted_at(h: u8) -> i64 {
    hour(h).hours_since_epoch()
}

pub fn eu_hour(h: u8) -> TargetHour {
    TargetHour::new(hour(h), Region::new("EU").unwrap())
}

/// A valid record whose key bytes are all `seed`.
pub fn record(seed: u8, rolling_start: i64, period: i64, risk: i32, submission: i64) -> DiagnosisKeyRecord {
    DiagnosisKeyRecord::new(vec![seed; 16], rolling_start, period, risk, submission).unwrap()
}

/// Record with typical rolling values, submitted during hour `h` of `DAY`.
pub fn key_at(seed: u8, h: u8) -> DiagnosisKeyRecord {
    record(seed, 2_650_000 + seed as i64, 144, 3, submitted_at(h))
}

pub fn decode_bucket(bytes: &[u8]) -> FileBucket {
    FileBucket::decode(bytes).unwrap()
}

/// Union of all keys across all files of a bucket.
pub fn all_keys(bucket: &FileBucket) -> BTreeSet<Key> {
    bucket.files.iter().flat_map(|f| f.keys.iter().cloned()).collect()
}

/// Files below `root`, as `/`-joined paths relative to `root`, sorted.
pub fn written_files(root: &Path) -> Vec<String> {
    let mut out: Vec<String> = WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel: PathBuf = e.path().strip_prefix(root).unwrap().to_path_buf();
            rel.iter().map(|s| s.to_string_lossy().into_owned()).collect::<Vec<_>>().join("/")
        })
        .collect();
    out.sort();
    out
}
