use crate::config::synthesis::SynthesisOptions;
use crate::constants::{SV_BASE_YEAR, SV_EPOCH_YEARS};
use crate::coordinates::coordinate_transformation::rotate_to_geodetic;
use crate::errors::SynthesisErrors;
use crate::models::components::CartesianComponents;
use crate::models::model::Model;
use crate::models::request::{CoordinateSystem, PointRequest};
use crate::models::result::{Advisory, SynthesisResult};
use crate::physics::elements::{calculate_elements, calculate_sv_elements};
use crate::physics::harmonics::synth_values;
use nalgebra as na;
use tracing::{debug, warn};

/// Start of the 5-year window enclosing `date`. SV is held constant across it.
pub fn sv_epoch_start(date: f64) -> f64 {
    ((date - SV_BASE_YEAR) / SV_EPOCH_YEARS).floor() * SV_EPOCH_YEARS + SV_BASE_YEAR
}

/// Main field, secular variation and derived elements at one point, using
/// the model's full degree range.
pub fn synthesize(model: &Model, request: &PointRequest) -> Result<SynthesisResult, SynthesisErrors> {
    synthesize_with(model, request, &SynthesisOptions::default())
}

pub fn synthesize_with(
    model: &Model,
    request: &PointRequest,
    options: &SynthesisOptions,
) -> Result<SynthesisResult, SynthesisErrors> {
    request.validate()?;
    let (nmin, nmax) = options.resolve(model.degree_bounds());

    let mut advisories = Vec::new();
    if !model.contains_date(request.date) {
        warn!(
            date = request.date,
            first = model.first_epoch(),
            last = model.last_epoch(),
            "Date outside the model range, coefficients are extrapolated"
        );
        advisories.push(Advisory::Extrapolated {
            date: request.date,
            first: model.first_epoch(),
            last: model.last_epoch(),
        });
    }

    let interpolator = model.interpolator();
    let epoch_start = sv_epoch_start(request.date);
    debug!(date = request.date, epoch_start, "Selected secular variation epoch");

    let main_coeffs = interpolator.interpolate(request.date);
    let start_coeffs = interpolator.interpolate(epoch_start);
    let sv_coeffs = interpolator.interpolate(epoch_start + 1.0) - &start_coeffs;

    let field = field_at(&main_coeffs, request, nmin, nmax, &mut advisories)?;
    let field_sv = field_at(&sv_coeffs, request, nmin, nmax, &mut advisories)?;
    let field_epoch_start = field_at(&start_coeffs, request, nmin, nmax, &mut advisories)?;

    Ok(SynthesisResult {
        elements: calculate_elements(&field),
        elements_sv: calculate_sv_elements(&field_epoch_start, &field_sv),
        field,
        field_sv,
        field_epoch_start,
        advisories,
    })
}

/// Synthesize one coefficient vector at the request point, in the request's frame
fn field_at(
    coeffs: &na::DVector<f64>,
    request: &PointRequest,
    nmin: usize,
    nmax: usize,
    advisories: &mut Vec<Advisory>,
) -> Result<CartesianComponents, SynthesisErrors> {
    let synthesis = synth_values(
        coeffs.as_slice(),
        request.radius,
        request.colatitude,
        request.longitude,
        Some(nmax),
        Some(nmin),
    )?;
    debug!(nmin, nmax = synthesis.nmax, "Synthesized field");

    for advisory in synthesis.advisories {
        if !advisories.contains(&advisory) {
            advisories.push(advisory);
        }
    }

    let field = CartesianComponents::from(synthesis.components);
    Ok(match request.coordinate_system {
        CoordinateSystem::Geodetic => rotate_to_geodetic(&field, request.sin_delta, request.cos_delta),
        CoordinateSystem::Geocentric => field,
    })
}
