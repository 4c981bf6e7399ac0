use launch_capacity::config::settings::TableSource;
use launch_capacity::mission::loader::load_missions;
use launch_capacity::mission::{CapacityStatus, MissionAssessment, MissionEvaluator};
use std::env;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE: &str = "usage: launch-capacity <mission_csv> [performance_csv]";

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so the report can be piped
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut args = env::args().skip(1);
    let mission_path = args.next().map(PathBuf::from).ok_or(USAGE)?;
    let source = TableSource::resolve(args.next().map(PathBuf::from));
    info!("Performance table source: {:?}", source);

    let table = source.load()?;
    let missions = load_missions(&mission_path)?;
    let evaluator = MissionEvaluator::new(&table);

    println!("Mission Data Analysis:");
    println!("{}", "-".repeat(80));
    for assessment in evaluator.evaluate_all(&missions)? {
        print_assessment(&assessment);
        println!("{}", "-".repeat(80));
    }

    Ok(())
}

fn or_null(value: Option<f64>, unit: &str) -> String {
    value
        .map(|v| format!("{}{}", v, unit))
        .unwrap_or_else(|| "null".to_string())
}

fn print_assessment(assessment: &MissionAssessment) {
    let record = assessment.record;
    if let Some(number) = record.mission_number {
        println!("\nMission {}: {}", number, record.mission_name);
    }
    if let Some(date) = record.date {
        println!("Launch Date: {}", date);
    }
    println!(
        "Altitude: {}, Inclination: {}",
        or_null(record.altitude_km, " km"),
        or_null(record.inclination_deg, "°")
    );
    println!("Actual Payload: {}", or_null(record.payload_mass_kg, " kg"));

    match assessment.status {
        CapacityStatus::Estimated(kg) => {
            println!("Estimated Max Capacity: {:.1} kg", kg);
            if let Some(pct) = assessment.utilization_pct {
                println!("Capacity Utilization: {:.1}%", pct);
            }
            if let Some((lower, upper)) = assessment.altitude_bracket {
                println!("Bracketing altitudes: {} km and {} km", lower, upper);
            }
            if let Some((lower, upper)) = assessment.inclination_bracket {
                println!("Bracketing inclinations: {}° and {}°", lower, upper);
            }
        }
        CapacityStatus::OutOfBounds => {
            println!("Estimated Max Capacity: null (parameters outside interpolation bounds)")
        }
        CapacityStatus::MissingOrbit => {
            println!("Estimated Max Capacity: null (missing altitude or inclination data)")
        }
    }
}
