use nalgebra as na;
use serde::{Deserialize, Serialize};

/// Field in the local spherical frame [nT]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SphericalComponents {
    pub radial: f64, // B_r, positive outward
    pub theta: f64,  // B_theta, positive southward
    pub phi: f64,    // B_phi, positive eastward
}

/// Field in the local north/east/down frame [nT]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianComponents {
    pub x: f64, // North
    pub y: f64, // East
    pub z: f64, // Vertical, positive down
}

impl CartesianComponents {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        CartesianComponents { x, y, z }
    }

    pub fn to_vector(&self) -> na::Vector3<f64> {
        na::Vector3::new(self.x, self.y, self.z)
    }
}

impl From<na::Vector3<f64>> for CartesianComponents {
    fn from(v: na::Vector3<f64>) -> Self {
        CartesianComponents::new(v[0], v[1], v[2])
    }
}

impl From<SphericalComponents> for CartesianComponents {
    /// X = -B_theta, Y = B_phi, Z = -B_r
    fn from(b: SphericalComponents) -> Self {
        CartesianComponents::new(-b.theta, b.phi, -b.radial)
    }
}

/// Declination, inclination, horizontal and total intensity.
///
/// A record holds either absolute values (degrees, nT) or their secular
/// variation (arc-minutes/yr, nT/yr), never a mix.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeomagneticElements {
    pub declination: f64,
    pub horizontal_intensity: f64,
    pub inclination: f64,
    pub total_intensity: f64,
}
