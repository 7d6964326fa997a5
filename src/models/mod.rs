pub mod components;
pub mod generation;
pub mod model;
pub mod request;
pub mod result;

pub use components::{CartesianComponents, GeomagneticElements, SphericalComponents};
pub use generation::IgrfGeneration;
pub use model::{DegreeBounds, Model};
pub use request::{CoordinateSystem, PointRequest};
pub use result::{Advisory, SynthesisResult};
