//! Geomagnetic field synthesis from IGRF spherical-harmonic models.
//!
//! Coefficient snapshots are interpolated to the requested date, expanded in
//! Schmidt quasi-normalized harmonics at one point, and reduced to the
//! geomagnetic elements D, H, I, F and their secular variation.

pub mod config;
pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod io;
pub mod models;
pub mod numerics;
pub mod physics;

pub use config::SynthesisOptions;
pub use coordinates::coordinate_transformation::{geocentric_to_geodetic, geodetic_to_geocentric};
pub use errors::{ShcErrors, SynthesisErrors};
pub use models::{
    Advisory, CartesianComponents, CoordinateSystem, GeomagneticElements, IgrfGeneration, Model,
    PointRequest, SynthesisResult,
};
pub use physics::synthesizer::{synthesize, synthesize_with};
