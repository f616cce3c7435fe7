//! Wire messages of the exposure-notification export format.
//!
//! Declared by hand with `prost` derives; field tags follow declaration order
//! and must never be renumbered.

/// Envelope holding every export file produced for one hour.
#[derive(Clone, PartialEq, prost::Message)]
pub struct FileBucket {
    #[prost(message, repeated, tag = "1")]
    pub files: Vec<File>,
}

/// One time/region-scoped batch of keys.
#[derive(Clone, PartialEq, prost::Message)]
pub struct File {
    /// Epoch seconds, inclusive.
    #[prost(int64, tag = "1")]
    pub start_timestamp: i64,
    /// Epoch seconds, exclusive.
    #[prost(int64, tag = "2")]
    pub end_timestamp: i64,
    #[prost(string, tag = "3")]
    pub region: String,
    #[prost(message, repeated, tag = "4")]
    pub keys: Vec<Key>,
}

/// A single wire-encoded diagnosis key.
///
/// Ordered by all fields so a `BTreeSet<Key>` both deduplicates by value and
/// yields a stable iteration order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Message)]
pub struct Key {
    #[prost(bytes = "vec", tag = "1")]
    pub key_data: Vec<u8>,
    #[prost(int32, tag = "2")]
    pub rolling_start_number: i32,
    #[prost(int32, tag = "3")]
    pub rolling_period: i32,
    #[prost(int32, tag = "4")]
    pub transmission_risk_level: i32,
}
