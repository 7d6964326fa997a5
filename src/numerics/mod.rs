pub mod interpolator;
pub mod legendre;
