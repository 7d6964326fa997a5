use crate::constants::*;
use crate::models::components::CartesianComponents;
use nalgebra as na;

/// Position on the geocentric sphere plus the factors that rotate field
/// vectors back into the geodetic frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricPosition {
    pub radius: f64,     // Geocentric radius [km]
    pub colatitude: f64, // Geocentric colatitude [deg]
    pub sin_delta: f64,  // Rotation factor for B_X
    pub cos_delta: f64,  // Rotation factor for B_Z
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPosition {
    pub altitude: f64,   // Height above the ellipsoid [km]
    pub colatitude: f64, // Geodetic colatitude [deg]
}

/// Convert geodetic altitude and colatitude to geocentric radius and colatitude (WGS84)
///
/// Equations (51)-(53) of Langel, "The main field", in Geomagnetism vol. 1
/// (Jacobs ed., 1987), as used by Malin & Barraclough (1981).
pub fn geodetic_to_geocentric(altitude: f64, geodetic_colatitude: f64) -> GeocentricPosition {
    let a2 = WGS84_A_KM * WGS84_A_KM;
    let a4 = a2 * a2;
    let b2 = WGS84_B_KM * WGS84_B_KM;
    let b4 = b2 * b2;

    let theta = geodetic_colatitude.to_radians();
    let ctgd = theta.cos();
    let stgd = theta.sin();
    let c2 = ctgd * ctgd;
    let s2 = 1.0 - c2;

    let rho = (a2 * s2 + b2 * c2).sqrt();
    let radius = (altitude * (altitude + 2.0 * rho) + (a4 * s2 + b4 * c2) / (rho * rho)).sqrt();

    let cos_delta = (altitude + rho) / radius;
    let sin_delta = (a2 - b2) * ctgd * stgd / (rho * radius);

    // Rounding can push this past ±1 at the poles
    let cos_colatitude = (ctgd * cos_delta - stgd * sin_delta).clamp(-1.0, 1.0);

    GeocentricPosition {
        radius,
        colatitude: cos_colatitude.acos().to_degrees(),
        sin_delta,
        cos_delta,
    }
}

/// Convert geocentric radius and colatitude to geodetic altitude and colatitude (WGS84)
///
/// Closed form of Zhu (1994), IEEE Trans. Aerosp. Electron. Syst. 30(3).
/// Ill-conditioned close to the poles, where the result may be NaN.
pub fn geocentric_to_geodetic(radius: f64, colatitude: f64) -> GeodeticPosition {
    let a = WGS84_A_KM;
    let b = WGS84_B_KM;
    let a2 = a * a;
    let b2 = b * b;

    let e2 = (a2 - b2) / a2; // First eccentricity squared
    let e4 = e2 * e2;
    let ep2 = (a2 - b2) / b2; // Second eccentricity squared

    let theta = colatitude.to_radians();
    let r = radius * theta.sin();
    let z = radius * theta.cos();
    let r2 = r * r;
    let z2 = z * z;

    let f = 54.0 * b2 * z2;
    let g = r2 + (1.0 - e2) * z2 - e2 * (a2 - b2);
    let c = e4 * f * r2 / g.powi(3);
    let s = (1.0 + c + (c * c + 2.0 * c).sqrt()).powf(1.0 / 3.0);
    let p = f / (3.0 * (s + 1.0 / s + 1.0).powi(2) * g * g);
    let q = (1.0 + 2.0 * e4 * p).sqrt();

    let r0 = -p * e2 * r / (1.0 + q)
        + (0.5 * a2 * (1.0 + 1.0 / q) - p * (1.0 - e2) * z2 / (q * (1.0 + q)) - 0.5 * p * r2).sqrt();

    let u = ((r - e2 * r0).powi(2) + z2).sqrt();
    let v = ((r - e2 * r0).powi(2) + (1.0 - e2) * z2).sqrt();
    let z0 = b2 * z / (a * v);

    GeodeticPosition {
        altitude: u * (1.0 - b2 / (a * v)),
        colatitude: 90.0 - (z + ep2 * z0).atan2(r).to_degrees(),
    }
}

/// Rotation about the east axis taking geocentric (X, Y, Z) into the geodetic frame
pub fn geodetic_rotation(sin_delta: f64, cos_delta: f64) -> na::Matrix3<f64> {
    na::Matrix3::new(
        cos_delta, 0.0, sin_delta,
        0.0,       1.0, 0.0,
        -sin_delta, 0.0, cos_delta,
    )
}

/// X' = X cd + Z sd, Z' = Z cd - X sd; Y is unchanged
pub fn rotate_to_geodetic(
    field: &CartesianComponents,
    sin_delta: f64,
    cos_delta: f64,
) -> CartesianComponents {
    CartesianComponents::from(geodetic_rotation(sin_delta, cos_delta) * field.to_vector())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    #[test]
    fn test_geodetic_to_geocentric_tokyo() {
        let pos = geodetic_to_geocentric(0.0, 90.0 - 35.658);
        assert_abs_diff_eq!(pos.radius, 6370.910156840483, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.colatitude, 54.52408663919481, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.sin_delta, 0.003178006028319621, epsilon = 1e-12);
        assert_abs_diff_eq!(pos.cos_delta, 0.9999949501260912, epsilon = 1e-12);
    }

    #[test_case(90.0, WGS84_A_KM; "equator")]
    #[test_case(0.0, WGS84_B_KM; "north pole")]
    #[test_case(180.0, WGS84_B_KM; "south pole")]
    fn test_geodetic_surface_radius(colatitude: f64, radius: f64) {
        let pos = geodetic_to_geocentric(0.0, colatitude);
        assert_abs_diff_eq!(pos.radius, radius, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.colatitude, colatitude, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.sin_delta, 0.0, epsilon = 1e-12);
    }

    #[test_case(0.0; "north pole")]
    #[test_case(180.0; "south pole")]
    fn test_geostationary_altitude_over_pole(colatitude: f64) {
        let pos = geodetic_to_geocentric(35786.0, colatitude);
        assert!(pos.colatitude.is_finite());
        assert_abs_diff_eq!(pos.colatitude, colatitude, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.radius, WGS84_B_KM + 35786.0, epsilon = 1e-9);
    }

    #[test]
    fn test_round_trip_recovers_colatitude() {
        let mut rng = StdRng::seed_from_u64(1994);
        for _ in 0..500 {
            let colatitude: f64 = rng.gen_range(0.5..179.5);
            let altitude: f64 = if rng.gen_bool(0.5) {
                0.0
            } else {
                rng.gen_range(-10.0..1000.0)
            };

            let geocentric = geodetic_to_geocentric(altitude, colatitude);
            let geodetic = geocentric_to_geodetic(geocentric.radius, geocentric.colatitude);

            assert_abs_diff_eq!(geodetic.colatitude, colatitude, epsilon = 1e-6);
            assert_abs_diff_eq!(geodetic.altitude, altitude, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_rotation_leaves_east_component() {
        let field = CartesianComponents::new(30013.239885580155, -4161.564455861028, 35691.608290802906);
        let rotated = rotate_to_geodetic(&field, 0.003178006028319621, 0.9999949501260912);

        assert_abs_diff_eq!(rotated.x, 30126.516468811737, epsilon = 1e-6);
        assert_eq!(rotated.y, field.y);
        assert_abs_diff_eq!(rotated.z, 35596.04579539565, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_preserves_magnitude() {
        let pos = geodetic_to_geocentric(120.0, 33.0);
        let field = CartesianComponents::new(21000.0, -1500.0, 44000.0);
        let rotated = rotate_to_geodetic(&field, pos.sin_delta, pos.cos_delta);
        assert_abs_diff_eq!(
            rotated.to_vector().magnitude(),
            field.to_vector().magnitude(),
            epsilon = 1e-8
        );
    }
}
