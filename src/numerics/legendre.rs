use nalgebra as na;

/// Schmidt quasi-normalized associated Legendre functions and their
/// colatitude derivatives for one colatitude.
///
/// The table is (nmax + 1) x (nmax + 2). `P(n, m)` sits at `[(n, m)]` for
/// `m <= n`; the derivative dP(n, m)/dtheta sits in the otherwise unused
/// transposed slot `[(m, n + 1)]`.
#[derive(Debug, Clone)]
pub struct LegendreTable {
    nmax: usize,
    table: na::DMatrix<f64>,
}

impl LegendreTable {
    /// Recursion of Langel (1987) for the functions, closed-form relations
    /// for the derivatives. `colatitude` in degrees.
    pub fn new(nmax: usize, colatitude: f64) -> Self {
        let (sin_theta, cos_theta) = colatitude.to_radians().sin_cos();

        let mut p = na::DMatrix::<f64>::zeros(nmax + 1, nmax + 2);
        p[(0, 0)] = 1.0;
        if nmax == 0 {
            return LegendreTable { nmax, table: p };
        }
        p[(1, 1)] = sin_theta;

        // sqrt(i) for every integer the recursions touch
        let root: Vec<f64> = (0..=2 * nmax * (nmax + 1))
            .map(|i| (i as f64).sqrt())
            .collect();

        for m in 0..nmax {
            let p_mm = root[2 * m + 1] * p[(m, m)];
            p[(m + 1, m)] = cos_theta * p_mm;

            if m > 0 {
                p[(m + 1, m + 1)] = sin_theta * p_mm / root[2 * m + 2];
            }

            for n in (m + 2)..=nmax {
                let d = n * n - m * m;
                let e = 2 * n - 1;
                p[(n, m)] =
                    (e as f64 * cos_theta * p[(n - 1, m)] - root[d - e] * p[(n - 2, m)]) / root[d];
            }
        }

        // Derivatives
        p[(0, 2)] = -p[(1, 1)];
        p[(1, 2)] = p[(1, 0)];

        for n in 2..=nmax {
            let nn = n * (n + 1);
            p[(0, n + 1)] = -root[nn / 2] * p[(n, 1)];
            p[(1, n + 1)] = (root[2 * nn] * p[(n, 0)] - root[nn - 2] * p[(n, 2)]) / 2.0;

            for m in 2..n {
                p[(m, n + 1)] = 0.5
                    * (root[(n + m) * (n - m + 1)] * p[(n, m - 1)]
                        - root[(n + m + 1) * (n - m)] * p[(n, m + 1)]);
            }

            p[(n, n + 1)] = root[2 * n] * p[(n, n - 1)] / 2.0;
        }

        LegendreTable { nmax, table: p }
    }

    pub fn nmax(&self) -> usize {
        self.nmax
    }

    /// P(n, m)
    pub fn p(&self, n: usize, m: usize) -> f64 {
        self.table[(n, m)]
    }

    /// dP(n, m)/dtheta, theta in radians
    pub fn dp(&self, n: usize, m: usize) -> f64 {
        self.table[(m, n + 1)]
    }

    /// sin(theta), i.e. P(1, 1)
    pub fn sin_theta(&self) -> f64 {
        self.table[(1, 1)]
    }

    pub fn as_matrix(&self) -> &na::DMatrix<f64> {
        &self.table
    }
}
