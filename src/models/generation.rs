use crate::errors::SynthesisErrors;
use serde::{Deserialize, Serialize};
use std::fmt;

/// IGRF generation number (IGRF-1 through IGRF-14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct IgrfGeneration(u8);

impl IgrfGeneration {
    pub const FIRST: IgrfGeneration = IgrfGeneration(1);
    pub const LATEST: IgrfGeneration = IgrfGeneration(14);

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Name of the coefficient file distributed for this generation.
    pub fn file_name(&self) -> String {
        format!("IGRF{}.SHC", self.0)
    }
}

impl Default for IgrfGeneration {
    fn default() -> Self {
        Self::LATEST
    }
}

impl TryFrom<u8> for IgrfGeneration {
    type Error = SynthesisErrors;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        if (Self::FIRST.0..=Self::LATEST.0).contains(&number) {
            Ok(IgrfGeneration(number))
        } else {
            Err(SynthesisErrors::InvalidGeneration(number))
        }
    }
}

impl From<IgrfGeneration> for u8 {
    fn from(generation: IgrfGeneration) -> Self {
        generation.0
    }
}

impl fmt::Display for IgrfGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IGRF-{}", self.0)
    }
}
