use crate::date::Hour;
use crate::error::DistributionError;
use std::fmt;

/// Region code as supplied by the caller, trimmed and non-empty. Case is
/// preserved: it is written to the wire verbatim.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Region(String);

impl Region {
    pub fn new(code: impl AsRef<str>) -> Result<Self, DistributionError> {
        let code = code.as_ref().trim().to_string();
        if code.is_empty() {
            return Err(DistributionError::EmptyRegion);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The hour and region an hour artifact is built for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetHour {
    hour: Hour,
    region: Region,
}

impl TargetHour {
    pub fn new(hour: Hour, region: Region) -> Self {
        Self { hour, region }
    }

    pub fn hour(&self) -> Hour {
        self.hour
    }

    pub fn region(&self) -> &Region {
        &self.region
    }
}

impl fmt::Display for TargetHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.region, self.hour)
    }
}
