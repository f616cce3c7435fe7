mod config;
mod date;
mod error;
mod keys;
mod target;
mod util;

pub mod proto;
mod encoder;
mod aggregator;
mod batch;

mod structure;
mod hour_file;
mod hours;
mod ndjson;
mod progress;
mod pipeline;
mod cli;

pub use crate::config::DistributionOptions;
pub use crate::date::{align_to_hour, hours_of_day, Hour, SECONDS_PER_HOUR};
pub use crate::error::DistributionError;
pub use crate::keys::{DiagnosisKeyRecord, KEY_LENGTH};
pub use crate::target::{Region, TargetHour};

// Core: filter, encode, batch.
pub use crate::aggregator::{hours_with_keys, select};
pub use crate::encoder::{encode, encode_all};
pub use crate::batch::{assemble, BatchPolicy, ExportBatch};

// Tree nodes and traversal.
pub use crate::structure::{write_file_atomic, Directory, TraversalContext, Writable};
pub use crate::hour_file::{HourFile, INDEX_FILE_NAME};
pub use crate::hours::{assemble_day, count_hours, DayAssembly};

pub use crate::pipeline::HourlyDistribution;
pub use crate::cli::{parse_date, Cli};
pub use crate::ndjson::{load_keys, write_keys};
pub use crate::util::init_tracing_once;
