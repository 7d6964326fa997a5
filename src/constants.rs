// WGS-84 ellipsoid, in kilometres
pub const WGS84_A_KM: f64 = 6378.137; // Equatorial radius [km]
pub const WGS84_F: f64 = 1.0 / 298.257223563; // Flattening
pub const WGS84_B_KM: f64 = WGS84_A_KM * (1.0 - WGS84_F); // Polar radius [km]

// Geomagnetic reference sphere
pub const REFERENCE_RADIUS_KM: f64 = 6371.2; // Magnetic reference radius [km]
pub const CMB_RADIUS_KM: f64 = 3485.0; // Core-mantle boundary [km]

// Secular variation is held constant within each 5-year window starting 1900
pub const SV_BASE_YEAR: f64 = 1900.0;
pub const SV_EPOCH_YEARS: f64 = 5.0;

// Angular SV is reported in arc-minutes per year
pub const ARCMIN_PER_DEGREE: f64 = 60.0;
