use cwa_hourly::{BatchPolicy, DistributionOptions};
use std::collections::HashMap;
use std::path::PathBuf;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_keep_one_file_per_hour() {
    let opts = DistributionOptions::default();
    assert_eq!(opts.region, "DE");
    assert_eq!(opts.max_keys_per_file, None);
    assert_eq!(opts.batch_policy(), BatchPolicy::unbounded());
}

#[test]
fn environment_overrides_apply() {
    let opts = DistributionOptions::default().merge_from(lookup(&[
        ("DIST_REGION", " fr "),
        ("DIST_READ_BUFFER_BYTES", "1048576"),
        ("DIST_OUTPUT_DIR", "/tmp/dist"),
        ("DIST_MAX_KEYS_PER_FILE", "500"),
        ("DIST_PARALLELISM", "4"),
        ("DIST_PROGRESS", "yes"),
    ]));
    assert_eq!(opts.region, "fr");
    assert_eq!(opts.read_buffer_bytes, 1024 * 1024);
    assert_eq!(opts.output_dir, PathBuf::from("/tmp/dist"));
    assert_eq!(opts.batch_policy(), BatchPolicy::max_keys_per_file(500));
    assert_eq!(opts.parallelism, Some(4));
    assert!(opts.progress);
}

/// Malformed numbers are ignored; `none` switches splitting off again.
#[test]
fn malformed_or_disabled_values() {
    let base = DistributionOptions::default().with_max_keys_per_file(Some(10)).with_parallelism(2);

    let opts = base.clone().merge_from(lookup(&[
        ("DIST_MAX_KEYS_PER_FILE", "lots"),
        ("DIST_PARALLELISM", "-1"),
        ("DIST_READ_BUFFER_BYTES", "big"),
    ]));
    assert_eq!(opts.max_keys_per_file, Some(10));
    assert_eq!(opts.read_buffer_bytes, DistributionOptions::default().read_buffer_bytes);
    assert_eq!(opts.parallelism, Some(2));

    let opts = base.merge_from(lookup(&[("DIST_MAX_KEYS_PER_FILE", "none"), ("DIST_REGION", "")]));
    assert_eq!(opts.max_keys_per_file, None);
    assert_eq!(opts.region, "DE");
}
