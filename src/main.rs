use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use igrf_synth::coordinates::epoch::decimal_year_from_date;
use igrf_synth::coordinates::location::DegreeFormat;
use igrf_synth::io::report::{render_text, write_csv, ReportRecord};
use igrf_synth::io::shc::{load_generation, load_shc_file};
use igrf_synth::{synthesize_with, IgrfGeneration, PointRequest, SynthesisOptions};
use std::fs::File;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Copy, ValueEnum)]
enum System {
    /// WGS-84 ellipsoid, --alt is height above it
    Geodetic,
    /// Spherical Earth, --alt is the geocentric radius
    Geocentric,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Decimal degrees
    Decimal,
    /// DD.MM, degrees and minutes
    Dm,
}

#[derive(Parser)]
#[command(name = "igrf-synth")]
#[command(about = "Geomagnetic field values at one location and date from an IGRF model")]
struct Cli {
    /// SHC coefficient file
    #[arg(long, conflicts_with = "shc_dir")]
    shc: Option<PathBuf>,
    /// Directory holding IGRF<generation>.SHC files
    #[arg(long)]
    shc_dir: Option<PathBuf>,
    /// IGRF generation to load from --shc-dir
    #[arg(long, default_value_t = 14)]
    generation: u8,
    /// Decimal year, e.g. 2025.25
    #[arg(long, conflicts_with = "calendar")]
    date: Option<f64>,
    /// Calendar date as YYYY-MM-DD
    #[arg(long)]
    calendar: Option<String>,
    /// Latitude, positive north
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude, positive east
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// Altitude or radius in km, depending on --system
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    alt: f64,
    #[arg(long, value_enum, default_value = "geodetic")]
    system: System,
    #[arg(long, value_enum, default_value = "decimal")]
    format: Format,
    /// Truncate the expansion at this degree
    #[arg(long)]
    nmax: Option<usize>,
    /// Write a CSV record here instead of printing the report
    #[arg(long)]
    csv: Option<PathBuf>,
}

/// RUST_LOG overrides the default `warn` filter
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let generation = IgrfGeneration::try_from(cli.generation)?;
    let shc = match (&cli.shc, &cli.shc_dir) {
        (Some(path), _) => load_shc_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        (None, Some(dir)) => load_generation(dir, generation)
            .with_context(|| format!("Failed to load {} from {}", generation, dir.display()))?,
        (None, None) => bail!("Either --shc or --shc-dir is required"),
    };

    let date = match (cli.date, &cli.calendar) {
        (Some(date), _) => date,
        (None, Some(calendar)) => {
            let day = NaiveDate::parse_from_str(calendar, "%Y-%m-%d")
                .with_context(|| format!("Invalid calendar date {}", calendar))?;
            decimal_year_from_date(&day)
        }
        (None, None) => bail!("Either --date or --calendar is required"),
    };

    let format = match cli.format {
        Format::Decimal => DegreeFormat::DecimalDegrees,
        Format::Dm => DegreeFormat::DegreesMinutes,
    };
    let (latitude, longitude) = format.to_decimal(cli.lat, cli.lon)?;

    let request = match cli.system {
        System::Geodetic => PointRequest::geodetic(date, cli.alt, latitude, longitude)?,
        System::Geocentric => PointRequest::geocentric(date, cli.alt, latitude, longitude)?,
    };
    debug!(?request, "Built point request");

    let options = SynthesisOptions {
        nmin: None,
        nmax: cli.nmax,
    };
    let result = synthesize_with(&shc.model, &request, &options)?;

    match &cli.csv {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_csv(file, &[ReportRecord::new(&request, &result)])?;
            println!("Written to file: {}", path.display());
        }
        None => println!("{}", render_text(&request, &result, generation)),
    }

    Ok(())
}
