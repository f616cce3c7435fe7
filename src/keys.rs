use crate::error::DistributionError;
use serde::{Deserialize, Serialize};

/// Length of a temporary exposure key in bytes.
pub const KEY_LENGTH: usize = 16;

/// A diagnosis key as persisted by the submission service.
///
/// Rolling numbers are stored wider than the wire format allows; narrowing
/// happens (and may fail) in [`crate::encoder::encode`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDiagnosisKey")]
pub struct DiagnosisKeyRecord {
    key_data: Vec<u8>,
    rolling_start_number: i64,
    rolling_period: i64,
    transmission_risk_level: i32,
    submission_timestamp: i64,
}

#[derive(Deserialize)]
struct RawDiagnosisKey {
    key_data: Vec<u8>,
    rolling_start_number: i64,
    rolling_period: i64,
    transmission_risk_level: i32,
    submission_timestamp: i64,
}

impl TryFrom<RawDiagnosisKey> for DiagnosisKeyRecord {
    type Error = DistributionError;

    fn try_from(raw: RawDiagnosisKey) -> Result<Self, Self::Error> {
        Self::new(
            raw.key_data,
            raw.rolling_start_number,
            raw.rolling_period,
            raw.transmission_risk_level,
            raw.submission_timestamp,
        )
    }
}

impl DiagnosisKeyRecord {
    pub fn new(
        key_data: Vec<u8>,
        rolling_start_number: i64,
        rolling_period: i64,
        transmission_risk_level: i32,
        submission_timestamp: i64,
    ) -> Result<Self, DistributionError> {
        if key_data.len() != KEY_LENGTH {
            return Err(DistributionError::InvalidKeyLength { expected: KEY_LENGTH, actual: key_data.len() });
        }
        Ok(Self { key_data, rolling_start_number, rolling_period, transmission_risk_level, submission_timestamp })
    }

    pub fn key_data(&self) -> &[u8] { &self.key_data }
    pub fn rolling_start_number(&self) -> i64 { self.rolling_start_number }
    pub fn rolling_period(&self) -> i64 { self.rolling_period }
    pub fn transmission_risk_level(&self) -> i32 { self.transmission_risk_level }
    /// Hours since epoch at which the key was accepted.
    pub fn submission_timestamp(&self) -> i64 { self.submission_timestamp }
}
