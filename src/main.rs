use anyhow::Result;
use clap::Parser;
use cwa_hourly::{init_tracing_once, Cli, DistributionOptions, HourlyDistribution};

fn main() -> Result<()> {
    init_tracing_once();
    let cli = Cli::parse();

    let hw = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(8);
    let base = DistributionOptions::default().with_parallelism(hw.min(24));
    let opts = cli.apply(base).merge_env();

    let root = HourlyDistribution::from_options(opts).run_day_from_ndjson(cli.date, &cli.input)?;
    println!("Wrote {}", root.display());
    Ok(())
}
