//! Domain record -> wire key translation.

use crate::error::DistributionError;
use crate::keys::DiagnosisKeyRecord;
use crate::proto::Key;
use std::collections::BTreeSet;

/// Encode a single record. Out-of-range rolling numbers are rejected, never truncated.
pub fn encode(record: &DiagnosisKeyRecord) -> Result<Key, DistributionError> {
    Ok(Key {
        key_data: record.key_data().to_vec(),
        rolling_start_number: to_wire_int("rolling_start_number", record.rolling_start_number())?,
        rolling_period: to_wire_int("rolling_period", record.rolling_period())?,
        transmission_risk_level: record.transmission_risk_level(),
    })
}

/// Encode every record into a value-deduplicated set. The first failure aborts the whole set.
pub fn encode_all<'a, I>(records: I) -> Result<BTreeSet<Key>, DistributionError>
where
    I: IntoIterator<Item = &'a DiagnosisKeyRecord>,
{
    records.into_iter().map(encode).collect()
}

#[inline]
fn to_wire_int(field: &'static str, value: i64) -> Result<i32, DistributionError> {
    i32::try_from(value).map_err(|_| DistributionError::Encoding { field, value })
}
