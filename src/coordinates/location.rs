use crate::errors::SynthesisErrors;
use serde::{Deserialize, Serialize};

/// How latitude/longitude values are written by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeFormat {
    /// `DD.MM`: integer degrees, minutes as the first two decimals
    DegreesMinutes,
    DecimalDegrees,
}

impl DegreeFormat {
    /// Returns (latitude, longitude) in decimal degrees after bounds checking
    pub fn to_decimal(&self, latitude: f64, longitude: f64) -> Result<(f64, f64), SynthesisErrors> {
        match self {
            DegreeFormat::DegreesMinutes => {
                let (latd, latm) = split_degrees_minutes(latitude);
                let (lond, lonm) = split_degrees_minutes(longitude);
                // Splitting -12.30 yields -30 minutes; the sign belongs to the degrees
                let latm = if latd != 0.0 { latm.abs() } else { latm };
                let lonm = if lond != 0.0 { lonm.abs() } else { lonm };
                check_lat_lon_bounds(latd, latm, lond, lonm)
            }
            DegreeFormat::DecimalDegrees => check_lat_lon_bounds(latitude, 0.0, longitude, 0.0),
        }
    }
}

/// Splits `DD.MM` notation into (degrees, minutes)
pub fn split_degrees_minutes(value: f64) -> (f64, f64) {
    let degrees = value.trunc();
    let fraction = ((value - degrees) * 1e6).round() / 1e6;
    (degrees, fraction * 100.0)
}

/// Validate latitude/longitude given as degrees and minutes and return decimal degrees.
///
/// Negative minutes are only accepted when the degree part is zero (points
/// between -1 and 0 degrees); otherwise minutes take the sign of the degrees.
pub fn check_lat_lon_bounds(
    latd: f64,
    latm: f64,
    lond: f64,
    lonm: f64,
) -> Result<(f64, f64), SynthesisErrors> {
    let lat_err = SynthesisErrors::LatitudeOutOfBounds {
        degrees: latd,
        minutes: latm,
    };
    let lon_err = SynthesisErrors::LongitudeOutOfBounds {
        degrees: lond,
        minutes: lonm,
    };

    if !(-90.0..=90.0).contains(&latd) || !(-60.0..=60.0).contains(&latm) {
        return Err(lat_err);
    }
    if !(-360.0..=360.0).contains(&lond) || !(-60.0..=60.0).contains(&lonm) {
        return Err(lon_err);
    }
    if latm < 0.0 && latd != 0.0 {
        return Err(lat_err);
    }
    if lonm < 0.0 && lond != 0.0 {
        return Err(lon_err);
    }

    let latm = if latd < 0.0 { -latm } else { latm };
    let lonm = if lond < 0.0 { -lonm } else { lonm };
    let lat = latd + latm / 60.0;
    let lon = lond + lonm / 60.0;

    // Minutes can still push a point past the pole
    if !(-90.0..=90.0).contains(&lat) {
        return Err(lat_err);
    }

    Ok((lat, lon))
}
