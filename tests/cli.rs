use clap::Parser;
use cwa_hourly::{parse_date, Cli, DistributionOptions};
use std::path::PathBuf;
use time::macros::date;

#[test]
fn positional_input_and_date() {
    let cli = Cli::try_parse_from(["cwa-hourly", "keys.ndjson", "2020-06-01"]).unwrap();
    assert_eq!(cli.input, PathBuf::from("keys.ndjson"));
    assert_eq!(cli.date, date!(2020 - 06 - 01));

    // No flags: only the progress bar is switched on.
    let opts = cli.apply(DistributionOptions::default());
    assert_eq!(opts.region, "DE");
    assert_eq!(opts.max_keys_per_file, None);
    assert!(opts.progress);
}

/// Flags land in the options; the environment layer still applies on top.
#[test]
fn flags_feed_options_before_env() {
    let cli = Cli::try_parse_from([
        "cwa-hourly",
        "--region",
        "de",
        "--output-dir",
        "/tmp/out",
        "--max-keys-per-file",
        "750",
        "--parallelism",
        "6",
        "--read-buffer-bytes",
        "65536",
        "--no-progress",
        "keys.ndjson",
        "2020-06-01",
    ])
    .unwrap();

    let opts = cli.apply(DistributionOptions::default());
    assert_eq!(opts.region, "de");
    assert_eq!(opts.output_dir, PathBuf::from("/tmp/out"));
    assert_eq!(opts.max_keys_per_file, Some(750));
    assert_eq!(opts.parallelism, Some(6));
    assert_eq!(opts.read_buffer_bytes, 65536);
    assert!(!opts.progress);

    let opts = opts.merge_from(|name| (name == "DIST_REGION").then(|| "fr".to_string()));
    assert_eq!(opts.region, "fr");
    assert_eq!(opts.max_keys_per_file, Some(750));
}

#[test]
fn malformed_arguments_are_rejected() {
    assert!(Cli::try_parse_from(["cwa-hourly", "keys.ndjson", "06/01/2020"]).is_err());
    assert!(Cli::try_parse_from(["cwa-hourly", "keys.ndjson"]).is_err());
    assert!(Cli::try_parse_from(["cwa-hourly", "keys.ndjson", "2020-06-01", "--max-keys-per-file", "-3"]).is_err());

    assert_eq!(parse_date(" 2020-12-31 "), Ok(date!(2020 - 12 - 31)));
    assert!(parse_date("2020-02-30").is_err());
}
