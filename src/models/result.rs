use super::components::{CartesianComponents, GeomagneticElements};
use serde::Serialize;
use std::fmt;

/// Non-fatal conditions raised during a synthesis. The result is still valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Advisory {
    /// Requested nmax exceeded what the coefficients support.
    DegreeClamped { requested: usize, used: usize },
    /// Evaluated exactly at a geographic pole.
    PoleEvaluation { colatitude: f64 },
    /// Date lies outside the model's epochs; coefficients were extrapolated.
    Extrapolated { date: f64, first: f64, last: f64 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::DegreeClamped { requested, used } => write!(
                f,
                "nmax = {} is incompatible with the number of model coefficients, using nmax = {}",
                requested, used
            ),
            Advisory::PoleEvaluation { colatitude } => {
                write!(f, "Geographic pole included (colatitude {})", colatitude)
            }
            Advisory::Extrapolated { date, first, last } => write!(
                f,
                "Date {} is outside the model range {} to {}; values have reduced accuracy",
                date, first, last
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SynthesisResult {
    /// D, H, I, F at the requested date
    pub elements: GeomagneticElements,
    /// SV of D, H, I, F about the 5-year epoch start
    pub elements_sv: GeomagneticElements,
    /// X, Y, Z at the requested date
    pub field: CartesianComponents,
    /// X, Y, Z secular variation [nT/yr]
    pub field_sv: CartesianComponents,
    /// X, Y, Z at the start of the enclosing 5-year epoch
    pub field_epoch_start: CartesianComponents,
    pub advisories: Vec<Advisory>,
}
