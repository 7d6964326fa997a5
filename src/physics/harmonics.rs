use crate::constants::REFERENCE_RADIUS_KM;
use crate::errors::SynthesisErrors;
use crate::models::components::SphericalComponents;
use crate::models::model::max_degree_for;
use crate::models::result::Advisory;
use crate::numerics::legendre::LegendreTable;
use tracing::warn;

/// Output of one spherical-harmonic synthesis
#[derive(Debug, Clone)]
pub struct HarmonicSynthesis {
    pub components: SphericalComponents,
    /// Degree actually used after clamping to the coefficient count
    pub nmax: usize,
    pub advisories: Vec<Advisory>,
}

/// Radial, colatitude and azimuthal field components of the internal
/// potential described by `coeffs` at one point.
///
/// `coeffs` follows the canonical ordering: for each degree n, g(n,0), then
/// the pairs g(n,m), h(n,m) for m = 1..n. Degrees below `nmin` are skipped
/// but their coefficients must still be present. `nmax` defaults to the
/// largest degree the coefficients describe and is clamped to it.
///
/// * `radius` - geocentric radius [km]
/// * `colatitude` - geocentric colatitude [deg], within [0, 180]
/// * `longitude` - [deg]
pub fn synth_values(
    coeffs: &[f64],
    radius: f64,
    colatitude: f64,
    longitude: f64,
    nmax: Option<usize>,
    nmin: Option<usize>,
) -> Result<HarmonicSynthesis, SynthesisErrors> {
    let mut advisories = Vec::new();

    if !(0.0..=180.0).contains(&colatitude) {
        return Err(SynthesisErrors::ColatitudeOutOfBounds(colatitude));
    }
    let at_north_pole = colatitude == 0.0;
    let at_south_pole = colatitude == 180.0;
    if at_north_pole || at_south_pole {
        warn!(colatitude, "Geographic pole included");
        advisories.push(Advisory::PoleEvaluation { colatitude });
    }

    let nmin = nmin.unwrap_or(1);
    if nmin == 0 {
        return Err(SynthesisErrors::InvalidMinDegree(nmin));
    }

    let nmax_coeffs = max_degree_for(coeffs.len());
    let nmax = match nmax {
        Some(requested) if requested > nmax_coeffs => {
            warn!(
                requested,
                used = nmax_coeffs,
                "nmax is incompatible with the number of model coefficients"
            );
            advisories.push(Advisory::DegreeClamped {
                requested,
                used: nmax_coeffs,
            });
            nmax_coeffs
        }
        Some(requested) => requested,
        None => nmax_coeffs,
    };

    if nmax < nmin {
        return Err(SynthesisErrors::DegreeOrder { nmin, nmax });
    }

    let radius = radius / REFERENCE_RADIUS_KM;
    // (a/r)^(n+2), advanced once per degree
    let mut r_n = radius.powi(-(nmin as i32 + 2));

    let legendre = LegendreTable::new(nmax, colatitude);
    let sin_theta = legendre.sin_theta();

    let phi = longitude.to_radians();
    let (sin_mp, cos_mp): (Vec<f64>, Vec<f64>) =
        (0..=nmax).map(|m| (m as f64 * phi).sin_cos()).unzip();

    let mut b_radial = 0.0;
    let mut b_theta = 0.0;
    let mut b_phi = 0.0;

    let mut num = nmin * nmin - 1;
    for n in nmin..=nmax {
        let degree_factor = (n + 1) as f64;

        b_radial += degree_factor * legendre.p(n, 0) * r_n * coeffs[num];
        b_theta -= legendre.dp(n, 0) * r_n * coeffs[num];
        num += 1;

        for m in 1..=n {
            let g = coeffs[num];
            let h = coeffs[num + 1];
            let cos_term = g * cos_mp[m] + h * sin_mp[m];

            b_radial += degree_factor * legendre.p(n, m) * r_n * cos_term;
            b_theta -= legendre.dp(n, m) * r_n * cos_term;

            // P/sin(theta) has the derivative as its limit at the poles
            let div_p = if at_north_pole || (sin_theta == 0.0 && colatitude < 90.0) {
                legendre.dp(n, m)
            } else if at_south_pole || sin_theta == 0.0 {
                -legendre.dp(n, m)
            } else {
                legendre.p(n, m) / sin_theta
            };
            b_phi += m as f64 * div_p * r_n * (g * sin_mp[m] - h * cos_mp[m]);

            num += 2;
        }

        r_n /= radius;
    }

    Ok(HarmonicSynthesis {
        components: SphericalComponents {
            radial: b_radial,
            theta: b_theta,
            phi: b_phi,
        },
        nmax,
        advisories,
    })
}
