use crate::constants::CMB_RADIUS_KM;
use crate::coordinates::coordinate_transformation::geodetic_to_geocentric;
use crate::errors::SynthesisErrors;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateSystem {
    /// WGS-84 ellipsoid
    Geodetic,
    /// Earth approximated by a sphere
    Geocentric,
}

/// One evaluation point, already expressed on the geocentric sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRequest {
    pub date: f64,       // Decimal year
    pub radius: f64,     // Geocentric radius [km]
    pub colatitude: f64, // Geocentric colatitude [deg]
    pub longitude: f64,  // [deg]
    pub coordinate_system: CoordinateSystem,
    pub sin_delta: f64,
    pub cos_delta: f64,
}

impl PointRequest {
    pub fn new(
        date: f64,
        radius: f64,
        colatitude: f64,
        longitude: f64,
        coordinate_system: CoordinateSystem,
        sin_delta: f64,
        cos_delta: f64,
    ) -> Result<Self, SynthesisErrors> {
        let request = PointRequest {
            date,
            radius,
            colatitude,
            longitude,
            coordinate_system,
            sin_delta,
            cos_delta,
        };
        request.validate()?;
        Ok(request)
    }

    /// Point given by geodetic latitude and height above the WGS-84 ellipsoid
    pub fn geodetic(
        date: f64,
        altitude: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, SynthesisErrors> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SynthesisErrors::LatitudeOutOfBounds {
                degrees: latitude,
                minutes: 0.0,
            });
        }

        let position = geodetic_to_geocentric(altitude, 90.0 - latitude);
        Self::new(
            date,
            position.radius,
            position.colatitude,
            longitude,
            CoordinateSystem::Geodetic,
            position.sin_delta,
            position.cos_delta,
        )
    }

    /// Point given by geocentric latitude and radial distance
    pub fn geocentric(
        date: f64,
        radius: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, SynthesisErrors> {
        if !(radius >= CMB_RADIUS_KM) {
            return Err(SynthesisErrors::RadiusBelowCmb(radius));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SynthesisErrors::LatitudeOutOfBounds {
                degrees: latitude,
                minutes: 0.0,
            });
        }

        Self::new(
            date,
            radius,
            90.0 - latitude,
            longitude,
            CoordinateSystem::Geocentric,
            0.0,
            1.0,
        )
    }

    pub fn validate(&self) -> Result<(), SynthesisErrors> {
        if !self.date.is_finite() {
            return Err(SynthesisErrors::InvalidDate(self.date));
        }
        if !(0.0..=180.0).contains(&self.colatitude) {
            return Err(SynthesisErrors::ColatitudeOutOfBounds(self.colatitude));
        }
        Ok(())
    }
}
