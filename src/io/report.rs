use crate::coordinates::coordinate_transformation::geocentric_to_geodetic;
use crate::models::generation::IgrfGeneration;
use crate::models::request::{CoordinateSystem, PointRequest};
use crate::models::result::SynthesisResult;
use csv::Writer;
use serde::Serialize;
use std::io;

/// Latitude [deg] and altitude [km] as the caller gave them.
///
/// Geodetic requests are converted back from the geocentric sphere; geocentric
/// requests report the radius in place of an altitude.
pub fn reported_position(request: &PointRequest) -> (f64, f64) {
    match request.coordinate_system {
        CoordinateSystem::Geodetic => {
            let position = geocentric_to_geodetic(request.radius, request.colatitude);
            (90.0 - position.colatitude, position.altitude)
        }
        CoordinateSystem::Geocentric => (90.0 - request.colatitude, request.radius),
    }
}

pub fn render_text(
    request: &PointRequest,
    result: &SynthesisResult,
    generation: IgrfGeneration,
) -> String {
    let (latitude, altitude) = reported_position(request);
    let elements = &result.elements;
    let sv = &result.elements_sv;

    let mut lines = vec![
        format!(
            "Geomagnetic field values at: {:.4} deg / {:.4} deg, at altitude {:.1} for {} using {}",
            latitude, request.longitude, altitude, request.date, generation
        ),
        format!("Declination (D): {:.3} deg", elements.declination),
        format!("Inclination (I): {:.3} deg", elements.inclination),
        format!("Horizontal intensity (H): {:.1} nT", elements.horizontal_intensity),
        format!("Total intensity (F)     : {:.1} nT", elements.total_intensity),
        format!("North component (X)     : {:.1} nT", result.field.x),
        format!("East component (Y)      : {:.1} nT", result.field.y),
        format!("Vertical component (Z)  : {:.1} nT", result.field.z),
        format!("Declination SV (D): {:.2} arcmin/yr", sv.declination),
        format!("Inclination SV (I): {:.2} arcmin/yr", sv.inclination),
        format!("Horizontal SV (H): {:.1} nT/yr", sv.horizontal_intensity),
        format!("Total SV (F)     : {:.1} nT/yr", sv.total_intensity),
        format!("North SV (X)     : {:.1} nT/yr", result.field_sv.x),
        format!("East SV (Y)      : {:.1} nT/yr", result.field_sv.y),
        format!("Vertical SV (Z)  : {:.1} nT/yr", result.field_sv.z),
    ];
    lines.extend(result.advisories.iter().map(|advisory| format!("Warning: {}", advisory)));

    lines.join("\n")
}

/// One CSV row per evaluated point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRecord {
    #[serde(rename = "Date (yr)")]
    pub date: f64,
    #[serde(rename = "Latitude (deg)")]
    pub latitude: f64,
    #[serde(rename = "Longitude (deg)")]
    pub longitude: f64,
    #[serde(rename = "Altitude (km)")]
    pub altitude: f64,
    #[serde(rename = "System")]
    pub coordinate_system: CoordinateSystem,
    #[serde(rename = "D (deg)")]
    pub declination: f64,
    #[serde(rename = "I (deg)")]
    pub inclination: f64,
    #[serde(rename = "H (nT)")]
    pub horizontal_intensity: f64,
    #[serde(rename = "F (nT)")]
    pub total_intensity: f64,
    #[serde(rename = "X (nT)")]
    pub x: f64,
    #[serde(rename = "Y (nT)")]
    pub y: f64,
    #[serde(rename = "Z (nT)")]
    pub z: f64,
    #[serde(rename = "dD (arcmin/yr)")]
    pub declination_sv: f64,
    #[serde(rename = "dI (arcmin/yr)")]
    pub inclination_sv: f64,
    #[serde(rename = "dH (nT/yr)")]
    pub horizontal_intensity_sv: f64,
    #[serde(rename = "dF (nT/yr)")]
    pub total_intensity_sv: f64,
    #[serde(rename = "dX (nT/yr)")]
    pub x_sv: f64,
    #[serde(rename = "dY (nT/yr)")]
    pub y_sv: f64,
    #[serde(rename = "dZ (nT/yr)")]
    pub z_sv: f64,
}

impl ReportRecord {
    pub fn new(request: &PointRequest, result: &SynthesisResult) -> Self {
        let (latitude, altitude) = reported_position(request);
        ReportRecord {
            date: request.date,
            latitude,
            longitude: request.longitude,
            altitude,
            coordinate_system: request.coordinate_system,
            declination: result.elements.declination,
            inclination: result.elements.inclination,
            horizontal_intensity: result.elements.horizontal_intensity,
            total_intensity: result.elements.total_intensity,
            x: result.field.x,
            y: result.field.y,
            z: result.field.z,
            declination_sv: result.elements_sv.declination,
            inclination_sv: result.elements_sv.inclination,
            horizontal_intensity_sv: result.elements_sv.horizontal_intensity,
            total_intensity_sv: result.elements_sv.total_intensity,
            x_sv: result.field_sv.x,
            y_sv: result.field_sv.y,
            z_sv: result.field_sv.z,
        }
    }
}

/// Header plus one row per record
pub fn write_csv<W: io::Write>(writer: W, records: &[ReportRecord]) -> Result<(), csv::Error> {
    let mut writer = Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::components::{CartesianComponents, GeomagneticElements};
    use crate::models::result::Advisory;
    use approx::assert_abs_diff_eq;

    fn sample_result() -> SynthesisResult {
        SynthesisResult {
            elements: GeomagneticElements {
                declination: -7.864852276442103,
                horizontal_intensity: 30412.58971652809,
                inclination: 49.490048033130854,
                total_intensity: 46818.843316914346,
            },
            elements_sv: GeomagneticElements {
                declination: -2.3973281950799517,
                horizontal_intensity: 6.402221235353554,
                inclination: 1.2576517947301946,
                total_intensity: 29.895257190842557,
            },
            field: CartesianComponents::new(30126.516468811737, -4161.564455861024, 35596.04579539565),
            field_sv: CartesianComponents::new(3.443881324490017, -21.883216042947765, 33.852820298061374),
            field_epoch_start: CartesianComponents::new(30125.655498480617, -4156.093651850294, 35587.58259032115),
            advisories: vec![],
        }
    }

    #[test]
    fn test_reported_position_geodetic() {
        let request = PointRequest::geodetic(2025.25, 0.0, 35.658, 139.7016).unwrap();
        let (latitude, altitude) = reported_position(&request);
        assert_abs_diff_eq!(latitude, 35.658, epsilon = 1e-6);
        assert_abs_diff_eq!(altitude, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_reported_position_geocentric() {
        let request = PointRequest::geocentric(2025.25, 6771.2, -20.0, 10.0).unwrap();
        assert_eq!(reported_position(&request), (-20.0, 6771.2));
    }

    #[test]
    fn test_render_text() {
        let request = PointRequest::geocentric(2025.25, 6371.2, 35.0, 139.7016).unwrap();
        let mut result = sample_result();
        result.advisories.push(Advisory::DegreeClamped {
            requested: 20,
            used: 13,
        });
        let text = render_text(&request, &result, IgrfGeneration::LATEST);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Geomagnetic field values at: 35.0000 deg / 139.7016 deg, at altitude 6371.2 for 2025.25 using IGRF-14"
        );
        assert_eq!(lines[1], "Declination (D): -7.865 deg");
        assert_eq!(lines[3], "Horizontal intensity (H): 30412.6 nT");
        assert_eq!(lines[8], "Declination SV (D): -2.40 arcmin/yr");
        assert_eq!(lines[14], "Vertical SV (Z)  : 33.9 nT/yr");
        assert!(lines[15].starts_with("Warning: nmax = 20"));
    }

    #[test]
    fn test_write_csv() {
        let request = PointRequest::geocentric(2025.25, 6371.2, 35.0, 139.7016).unwrap();
        let record = ReportRecord::new(&request, &sample_result());

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[record.clone(), record]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Date (yr),Latitude (deg),Longitude (deg),Altitude (km),System,D (deg)"));
        assert!(lines[1].starts_with("2025.25,35.0,139.7016,6371.2,Geocentric,-7.864852276442103"));
    }
}
