use crate::errors::SynthesisErrors;
use nalgebra as na;

/// Piecewise-linear interpolation of a coefficient table along its epoch axis.
///
/// Dates outside the epoch range are linearly extrapolated from the first two
/// (or last two) snapshots.
#[derive(Debug, Clone, Copy)]
pub struct CoefficientInterpolator<'a> {
    epochs: &'a [f64],
    coefficients: &'a na::DMatrix<f64>, // K x N, one column per epoch
}

impl<'a> CoefficientInterpolator<'a> {
    pub fn new(
        epochs: &'a [f64],
        coefficients: &'a na::DMatrix<f64>,
    ) -> Result<Self, SynthesisErrors> {
        if epochs.len() < 2 {
            return Err(SynthesisErrors::TooFewEpochs(epochs.len()));
        }
        if coefficients.ncols() != epochs.len() {
            return Err(SynthesisErrors::RowLengthMismatch {
                row: 0,
                found: coefficients.ncols(),
                expected: epochs.len(),
            });
        }
        if !epochs[0].is_finite() {
            return Err(SynthesisErrors::EpochsNotIncreasing {
                index: 0,
                value: epochs[0],
            });
        }
        for (index, pair) in epochs.windows(2).enumerate() {
            if !(pair[1] > pair[0]) || !pair[1].is_finite() {
                return Err(SynthesisErrors::EpochsNotIncreasing {
                    index: index + 1,
                    value: pair[1],
                });
            }
        }

        Ok(Self::from_validated(epochs, coefficients))
    }

    pub(crate) fn from_validated(epochs: &'a [f64], coefficients: &'a na::DMatrix<f64>) -> Self {
        CoefficientInterpolator {
            epochs,
            coefficients,
        }
    }

    /// Index of the lower epoch of the interval used for `date`.
    ///
    /// Inside the range this is the bracketing interval, preferring the lower
    /// index on ties; outside it is the first or last interval.
    pub fn interval(&self, date: f64) -> usize {
        let below = self.epochs.partition_point(|&epoch| epoch < date);
        below.saturating_sub(1).min(self.epochs.len() - 2)
    }

    /// Coefficient vector (length K) at `date`
    pub fn interpolate(&self, date: f64) -> na::DVector<f64> {
        // Snapshot epochs are returned untouched
        if let Ok(index) = self
            .epochs
            .binary_search_by(|epoch| epoch.total_cmp(&date))
        {
            return self.coefficients.column(index).into_owned();
        }

        let i = self.interval(date);
        let (x0, x1) = (self.epochs[i], self.epochs[i + 1]);
        let fraction = (date - x0) / (x1 - x0);

        let lower = self.coefficients.column(i);
        let upper = self.coefficients.column(i + 1);
        lower + (upper - lower) * fraction
    }

    /// One coefficient vector per date, in the order given
    pub fn interpolate_many(&self, dates: &[f64]) -> Vec<na::DVector<f64>> {
        dates.iter().map(|&date| self.interpolate(date)).collect()
    }
}
