pub mod coordinate_transformation;
pub mod epoch;
pub mod location;
