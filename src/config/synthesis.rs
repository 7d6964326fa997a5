use crate::models::model::DegreeBounds;
use serde::{Deserialize, Serialize};

/// Degree range overrides for a synthesis. Unset fields fall back to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisOptions {
    pub nmin: Option<usize>,
    pub nmax: Option<usize>,
}

impl SynthesisOptions {
    pub fn with_nmax(nmax: usize) -> Self {
        SynthesisOptions {
            nmin: None,
            nmax: Some(nmax),
        }
    }

    /// (nmin, requested nmax) against the model's bounds. The requested nmax
    /// is not clamped here.
    pub fn resolve(&self, bounds: DegreeBounds) -> (usize, usize) {
        (
            self.nmin.unwrap_or(bounds.nmin),
            self.nmax.unwrap_or(bounds.nmax),
        )
    }
}
