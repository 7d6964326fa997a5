use crate::constants::ARCMIN_PER_DEGREE;
use crate::models::components::{CartesianComponents, GeomagneticElements};

/// D, H, I, F from the north/east/down field. Angles in degrees.
pub fn calculate_elements(field: &CartesianComponents) -> GeomagneticElements {
    let h = field.x.hypot(field.y);
    let f = h.hypot(field.z);

    GeomagneticElements {
        declination: field.y.atan2(field.x).to_degrees(),
        horizontal_intensity: h,
        inclination: field.z.atan2(h).to_degrees(),
        total_intensity: f,
    }
}

/// Secular variation of D, H, I, F from the field and its secular variation.
///
/// The elements are nonlinear in X, Y, Z so the chain rule is taken about
/// `field`. Angular rates come out in arc-minutes/yr, intensities in nT/yr.
pub fn calculate_sv_elements(
    field: &CartesianComponents,
    sv: &CartesianComponents,
) -> GeomagneticElements {
    let (x, y, z) = (field.x, field.y, field.z);
    let h2 = x * x + y * y;
    let h = h2.sqrt();
    let f2 = h2 + z * z;
    let f = f2.sqrt();

    let h_dot = (x * sv.x + y * sv.y) / h;
    let f_dot = (x * sv.x + y * sv.y + z * sv.z) / f;
    let d_dot = ((sv.y * x - sv.x * y) / h2).to_degrees();
    let i_dot = ((h * sv.z - h_dot * z) / f2).to_degrees();

    GeomagneticElements {
        declination: ARCMIN_PER_DEGREE * d_dot,
        horizontal_intensity: h_dot,
        inclination: ARCMIN_PER_DEGREE * i_dot,
        total_intensity: f_dot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(
        CartesianComponents::new(30126.516468811737, -4161.564455861024, 35596.04579539565),
        GeomagneticElements {
            declination: -7.864852276442103,
            horizontal_intensity: 30412.58971652809,
            inclination: 49.490048033130854,
            total_intensity: 46818.843316914346,
        };
        "mid latitude"
    )]
    #[test_case(
        CartesianComponents::new(0.0, 20000.0, 0.0),
        GeomagneticElements {
            declination: 90.0,
            horizontal_intensity: 20000.0,
            inclination: 0.0,
            total_intensity: 20000.0,
        };
        "due east"
    )]
    #[test_case(
        CartesianComponents::new(0.0, 0.0, -50000.0),
        GeomagneticElements {
            declination: 0.0,
            horizontal_intensity: 0.0,
            inclination: -90.0,
            total_intensity: 50000.0,
        };
        "vertical upward"
    )]
    fn test_calculate_elements(field: CartesianComponents, expected: GeomagneticElements) {
        let result = calculate_elements(&field);
        assert_abs_diff_eq!(result.declination, expected.declination, epsilon = 1e-9);
        assert_abs_diff_eq!(result.horizontal_intensity, expected.horizontal_intensity, epsilon = 1e-6);
        assert_abs_diff_eq!(result.inclination, expected.inclination, epsilon = 1e-9);
        assert_abs_diff_eq!(result.total_intensity, expected.total_intensity, epsilon = 1e-6);
    }

    #[test]
    fn test_calculate_sv_elements() {
        let field = CartesianComponents::new(30125.655498480617, -4156.093651850294, 35587.58259032115);
        let sv = CartesianComponents::new(3.443881324490017, -21.883216042947765, 33.852820298061374);

        let result = calculate_sv_elements(&field, &sv);
        assert_abs_diff_eq!(result.declination, -2.3973281950799517, epsilon = 1e-9);
        assert_abs_diff_eq!(result.horizontal_intensity, 6.402221235353554, epsilon = 1e-9);
        assert_abs_diff_eq!(result.inclination, 1.2576517947301946, epsilon = 1e-9);
        assert_abs_diff_eq!(result.total_intensity, 29.895257190842557, epsilon = 1e-9);
    }

    #[test]
    fn test_sv_matches_finite_difference() {
        let field = CartesianComponents::new(21000.0, 1500.0, 43000.0);
        let sv = CartesianComponents::new(-12.0, 40.0, 25.0);
        let dt = 1e-4;

        let later = CartesianComponents::new(
            field.x + sv.x * dt,
            field.y + sv.y * dt,
            field.z + sv.z * dt,
        );
        let before = calculate_elements(&field);
        let after = calculate_elements(&later);
        let result = calculate_sv_elements(&field, &sv);

        let rate = |a: f64, b: f64| (b - a) / dt;
        assert_abs_diff_eq!(
            result.declination,
            60.0 * rate(before.declination, after.declination),
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            result.inclination,
            60.0 * rate(before.inclination, after.inclination),
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            result.total_intensity,
            rate(before.total_intensity, after.total_intensity),
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_zero_sv() {
        let field = CartesianComponents::new(21000.0, 1500.0, 43000.0);
        let result = calculate_sv_elements(&field, &CartesianComponents::default());
        assert_eq!(result, GeomagneticElements::default());
    }
}
