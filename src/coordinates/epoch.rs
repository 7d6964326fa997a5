use crate::models::model::Model;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

fn days_in_year(year: i32) -> f64 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366.0
    } else {
        365.0
    }
}

/// Convert a UTC calendar instant to a decimal year (2025.25 is a quarter into 2025)
pub fn decimal_year(datetime: &NaiveDateTime) -> f64 {
    let day_of_year = datetime.ordinal0() as f64;
    let seconds_of_day = datetime.num_seconds_from_midnight() as f64;
    datetime.year() as f64 + (day_of_year + seconds_of_day / 86400.0) / days_in_year(datetime.year())
}

pub fn decimal_year_from_date(date: &NaiveDate) -> f64 {
    decimal_year(&date.and_time(NaiveTime::default()))
}

/// Whether the model covers `date` without extrapolation
pub fn is_definitive(date: f64, model: &Model) -> bool {
    model.contains_date(date)
}
