use crate::errors::ShcErrors;
use crate::models::generation::IgrfGeneration;
use crate::models::model::{DegreeBounds, Model};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Parameter line of an SHC file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShcHeader {
    pub name: String,
    pub nmin: usize,
    pub nmax: usize,
    pub snapshots: usize, // N, number of epochs
    pub order: usize,     // Piecewise polynomial order
    pub step: usize,      // Snapshots between break points
    pub start_year: f64,
    pub end_year: f64,
}

impl ShcHeader {
    fn from_values(name: &str, values: &[f64], line: usize) -> Result<Self, ShcErrors> {
        let count = |value: f64| {
            if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
                Ok(value as usize)
            } else {
                Err(ShcErrors::InvalidHeader { line, value })
            }
        };

        Ok(ShcHeader {
            name: name.to_string(),
            nmin: count(values[0])?,
            nmax: count(values[1])?,
            snapshots: count(values[2])?,
            order: count(values[3])?,
            step: count(values[4])?,
            start_year: values[5],
            end_year: values[6],
        })
    }
}

#[derive(Debug, Clone)]
pub struct ShcFile {
    pub header: ShcHeader,
    pub model: Model,
}

const HEADER_FIELDS: usize = 7;

/// Parse SHC text.
///
/// `#` lines and blank lines are skipped. The first line with exactly seven
/// numbers is the header `nmin nmax N order step start_year end_year`. The
/// remaining numbers are N epochs followed by rows of `n m` and N values.
pub fn parse_shc(name: &str, text: &str) -> Result<ShcFile, ShcErrors> {
    let mut header = None;
    let mut data: Vec<f64> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let values = line
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|source| ShcErrors::ParseFloat {
                line: index + 1,
                source,
            })?;

        if header.is_none() && values.len() == HEADER_FIELDS {
            header = Some(ShcHeader::from_values(name, &values, index + 1)?);
        } else {
            data.extend(values);
        }
    }

    let header = header.ok_or_else(|| ShcErrors::MissingHeader(name.to_string()))?;
    let n = header.snapshots;
    if data.len() < n {
        return Err(ShcErrors::TruncatedData {
            expected: n,
            found: data.len(),
        });
    }

    let (epochs, coefficients) = data.split_at(n);
    let row_width = n + 2;
    if coefficients.len() % row_width != 0 {
        return Err(ShcErrors::TruncatedData {
            expected: (coefficients.len() / row_width + 1) * row_width,
            found: coefficients.len(),
        });
    }

    // Drop the leading degree and order of each row
    let rows: Vec<Vec<f64>> = coefficients
        .chunks(row_width)
        .map(|row| row[2..].to_vec())
        .collect();
    debug!(file = name, epochs = n, rows = rows.len(), "Parsed SHC data");

    let bounds = DegreeBounds::new(header.nmin, header.nmax)?;
    let model = Model::new(epochs.to_vec(), &rows, bounds)?;

    Ok(ShcFile { header, model })
}

pub fn load_shc_file(path: &Path) -> Result<ShcFile, ShcErrors> {
    let text = fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file = parse_shc(&name, &text)?;
    info!(
        path = %path.display(),
        nmax = file.header.nmax,
        first_epoch = file.model.first_epoch(),
        last_epoch = file.model.last_epoch(),
        "Loaded coefficient file"
    );
    Ok(file)
}

/// Load `IGRF<gen>.SHC` from `dir`
pub fn load_generation(dir: &Path, generation: IgrfGeneration) -> Result<ShcFile, ShcErrors> {
    load_shc_file(&dir.join(generation.file_name()))
}
