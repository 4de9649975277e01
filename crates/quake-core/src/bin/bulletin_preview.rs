use std::env;
use std::fs;

use quake_core::{assemble_record, load_reference_points, EventRecord, ReportSettings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn reference_points_path() -> String {
    env::var("REFERENCE_POINTS_PATH").unwrap_or_else(|_| "config/reference_points.json".to_string())
}

fn load_settings() -> ReportSettings {
    let Ok(path) = env::var("REPORT_SETTINGS_PATH") else {
        return ReportSettings::default();
    };
    match ReportSettings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path, error = %e, "Could not load report settings, using defaults");
            ReportSettings::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let event_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: bulletin_preview <event.json>");
            std::process::exit(1);
        }
    };

    let event_data = fs::read_to_string(&event_path)?;
    let record: EventRecord = serde_json::from_str(&event_data)?;

    let points_path = reference_points_path();
    let points = load_reference_points(&points_path)?;
    info!(path = %points_path, count = points.len(), "Loaded reference points");

    let settings = load_settings();
    let report = assemble_record(&record, &points, &settings)?;

    if !settings.meets_threshold(&report) {
        info!(
            intensity = report.primary_intensity,
            threshold = settings.min_report_intensity(),
            "Primary intensity is below the reporting threshold"
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
