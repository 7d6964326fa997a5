use crate::errors::SynthesisErrors;
use crate::numerics::interpolator::CoefficientInterpolator;
use nalgebra as na;
use serde::{Deserialize, Serialize};

/// Number of Gauss coefficients (g and h terms) needed for degrees 1..=nmax.
pub fn coefficient_count(nmax: usize) -> usize {
    nmax * (nmax + 2)
}

/// Largest degree fully described by `count` coefficients, i.e. the largest
/// `n` with `n(n+2) <= count`. Integer arithmetic only.
pub fn max_degree_for(count: usize) -> usize {
    let mut n = 0;
    while coefficient_count(n + 1) <= count {
        n += 1;
    }
    n
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeBounds {
    pub nmin: usize,
    pub nmax: usize,
}

impl DegreeBounds {
    pub fn new(nmin: usize, nmax: usize) -> Result<Self, SynthesisErrors> {
        if nmin == 0 {
            return Err(SynthesisErrors::InvalidMinDegree(nmin));
        }
        if nmax < nmin {
            return Err(SynthesisErrors::DegreeOrder { nmin, nmax });
        }
        Ok(DegreeBounds { nmin, nmax })
    }

    pub fn coefficient_count(&self) -> usize {
        coefficient_count(self.nmax)
    }
}

/// Time series of Gauss coefficient snapshots.
///
/// Coefficients are stored as a K x N matrix: one row per coefficient in
/// canonical order (g(n,0), then g(n,m), h(n,m) pairs for m = 1..n, for each
/// degree n), one column per epoch.
#[derive(Debug, Clone)]
pub struct Model {
    epochs: Vec<f64>,
    coefficients: na::DMatrix<f64>,
    degree_bounds: DegreeBounds,
}

impl Model {
    /// Builds a model from coefficient rows, each holding one value per epoch.
    pub fn new(
        epochs: Vec<f64>,
        rows: &[Vec<f64>],
        degree_bounds: DegreeBounds,
    ) -> Result<Self, SynthesisErrors> {
        for (row, values) in rows.iter().enumerate() {
            if values.len() != epochs.len() {
                return Err(SynthesisErrors::RowLengthMismatch {
                    row,
                    found: values.len(),
                    expected: epochs.len(),
                });
            }
        }

        let coefficients = na::DMatrix::from_fn(rows.len(), epochs.len(), |i, j| rows[i][j]);
        Self::from_matrix(epochs, coefficients, degree_bounds)
    }

    pub fn from_matrix(
        epochs: Vec<f64>,
        coefficients: na::DMatrix<f64>,
        degree_bounds: DegreeBounds,
    ) -> Result<Self, SynthesisErrors> {
        CoefficientInterpolator::new(&epochs, &coefficients)?;

        let expected = degree_bounds.coefficient_count();
        if coefficients.nrows() != expected {
            return Err(SynthesisErrors::CoefficientCount {
                nmax: degree_bounds.nmax,
                expected,
                found: coefficients.nrows(),
            });
        }

        Ok(Model {
            epochs,
            coefficients,
            degree_bounds,
        })
    }

    pub fn epochs(&self) -> &[f64] {
        &self.epochs
    }

    pub fn coefficients(&self) -> &na::DMatrix<f64> {
        &self.coefficients
    }

    pub fn degree_bounds(&self) -> DegreeBounds {
        self.degree_bounds
    }

    pub fn first_epoch(&self) -> f64 {
        self.epochs[0]
    }

    pub fn last_epoch(&self) -> f64 {
        self.epochs[self.epochs.len() - 1]
    }

    /// Whether `date` lies inside the epoch grid. Outside it values are extrapolated.
    pub fn contains_date(&self, date: f64) -> bool {
        (self.first_epoch()..=self.last_epoch()).contains(&date)
    }

    pub fn interpolator(&self) -> CoefficientInterpolator<'_> {
        CoefficientInterpolator::from_validated(&self.epochs, &self.coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0; "no coefficients")]
    #[test_case(2, 0; "below degree one")]
    #[test_case(3, 1; "degree one")]
    #[test_case(7, 1; "one short of degree two")]
    #[test_case(8, 2; "degree two")]
    #[test_case(195, 13; "IGRF degree 13")]
    #[test_case(224, 14; "degree 14 boundary")]
    #[test_case(223, 13; "one short of degree 14")]
    fn test_max_degree_for(count: usize, expected: usize) {
        assert_eq!(max_degree_for(count), expected);
    }

    #[test]
    fn test_max_degree_inverts_count_exactly() {
        for n in 1..200 {
            assert_eq!(max_degree_for(coefficient_count(n)), n);
            assert_eq!(max_degree_for(coefficient_count(n) - 1), n - 1);
        }
    }

    #[test]
    fn test_degree_bounds_validation() {
        assert_eq!(
            DegreeBounds::new(0, 13),
            Err(SynthesisErrors::InvalidMinDegree(0))
        );
        assert_eq!(
            DegreeBounds::new(3, 2),
            Err(SynthesisErrors::DegreeOrder { nmin: 3, nmax: 2 })
        );
        assert_eq!(DegreeBounds::new(1, 2).unwrap().coefficient_count(), 8);
    }

    fn rows(count: usize, epochs: usize) -> Vec<Vec<f64>> {
        (0..count)
            .map(|i| (0..epochs).map(|j| (i * 10 + j) as f64).collect())
            .collect()
    }

    #[test]
    fn test_model_rejects_ragged_rows() {
        let mut data = rows(3, 2);
        data[1].push(1.0);
        let err = Model::new(vec![2000.0, 2005.0], &data, DegreeBounds::new(1, 1).unwrap());
        assert_eq!(
            err.unwrap_err(),
            SynthesisErrors::RowLengthMismatch {
                row: 1,
                found: 3,
                expected: 2
            }
        );
    }

    #[test]
    fn test_model_rejects_unsorted_epochs() {
        let err = Model::new(
            vec![2005.0, 2000.0],
            &rows(3, 2),
            DegreeBounds::new(1, 1).unwrap(),
        );
        assert!(matches!(
            err,
            Err(SynthesisErrors::EpochsNotIncreasing { index: 1, .. })
        ));
    }

    #[test]
    fn test_model_rejects_wrong_row_count() {
        let err = Model::new(
            vec![2000.0, 2005.0],
            &rows(5, 2),
            DegreeBounds::new(1, 2).unwrap(),
        );
        assert_eq!(
            err.unwrap_err(),
            SynthesisErrors::CoefficientCount {
                nmax: 2,
                expected: 8,
                found: 5
            }
        );
    }

    #[test]
    fn test_model_accessors() {
        let model = Model::new(
            vec![2000.0, 2005.0, 2010.0],
            &rows(3, 3),
            DegreeBounds::new(1, 1).unwrap(),
        )
        .unwrap();

        assert_eq!(model.coefficients().shape(), (3, 3));
        assert_eq!(model.coefficients()[(2, 1)], 21.0);
        assert_eq!(model.first_epoch(), 2000.0);
        assert_eq!(model.last_epoch(), 2010.0);
        assert!(model.contains_date(2010.0));
        assert!(!model.contains_date(2010.5));
        assert!(!model.contains_date(1999.9));
    }
}
