//! # Windzone CLI
//!
//! Runs a zone pressure calculation from a JSON request file, or prompts for
//! the basic building inputs when no file is given.
//!
//! Logging goes to stderr and honors `RUST_LOG` (for example
//! `RUST_LOG=wind_core=debug`).

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use wind_core::calculations::{InternalPressureMode, ZoneCalculationResults};
use wind_core::coefficients::CalculationMethod;
use wind_core::exposure::ExposureCategory;
use wind_core::{compute_zone_pressures, CalcError, CalcResult, ZonePressureInput};

/// Windzone - ASCE 7 low-rise zone pressure calculator
#[derive(Parser, Debug)]
#[command(name = "wind_cli")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON request file (a serialized ZonePressureInput)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print only the JSON result
    #[arg(long)]
    json: bool,

    /// Use the governing GCpi combination instead of positive-only
    #[arg(long)]
    governing: bool,

    /// Use MWFRS coefficients for prompted input
    #[arg(long)]
    mwfrs: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn prompt_line(prompt: &str) -> Option<String> {
    eprint!("{}", prompt);
    io::stderr().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn load_request(path: &Path) -> CalcResult<ZonePressureInput> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    let input = serde_json::from_str(&text)?;
    info!(path = %path.display(), "loaded request");
    Ok(input)
}

fn prompt_request(args: &Args) -> CalcResult<ZonePressureInput> {
    let length_ft = prompt_f64("Building length (ft) [200.0]: ", 200.0);
    let width_ft = prompt_f64("Building width (ft) [50.0]: ", 50.0);
    let height_ft = prompt_f64("Mean roof height (ft) [20.0]: ", 20.0);
    let exposure: ExposureCategory = prompt_line("Exposure (B/C/D) [C]: ")
        .unwrap_or_else(|| "C".to_string())
        .parse()?;
    let wind_speed_mph = prompt_f64("Basic wind speed (mph) [115.0]: ", 115.0);

    let method = if args.mwfrs {
        CalculationMethod::MainForce
    } else {
        CalculationMethod::ComponentCladding
    };

    Ok(
        ZonePressureInput::new("CLI", length_ft, width_ft, height_ft, exposure, wind_speed_mph)
            .with_method(method),
    )
}

fn print_report(input: &ZonePressureInput, result: &ZoneCalculationResults) {
    println!("═══════════════════════════════════════════════════");
    println!("  ZONE PRESSURES: {}", input.label);
    println!("═══════════════════════════════════════════════════");
    println!();
    println!(
        "Building:  {:.1} x {:.1} x {:.1} ft, {}",
        input.length_ft, input.width_ft, input.height_ft, input.exposure
    );
    println!(
        "Shape:     {} (L/W = {:.2}, H/B = {:.2})",
        result.geometry.classification.display_name(),
        result.geometry.aspect_ratio,
        result.geometry.height_ratio
    );
    println!(
        "Enclosure: {} (GCpi {:+.2} / {:+.2})",
        result.enclosure.enclosure_type,
        result.enclosure.gcpi_positive,
        result.enclosure.gcpi_negative
    );
    println!(
        "Zone 1':   {}",
        if result.zone1_prime_required {
            format!("REQUIRED (+{:.0}%)", result.zone1_prime_analysis.pressure_increase_pct)
        } else {
            "not required".to_string()
        }
    );
    println!();
    println!("{}", result.summary());
    println!(
        "Range at {}: {:.2} to {:.2} psf",
        result.controlling_zone, result.pressure_bounds.lower_psf, result.pressure_bounds.upper_psf
    );

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warning in &result.warnings {
            println!("  {}", warning);
        }
    }

    println!();
    println!("Notes:");
    for note in &result.professional_notes {
        println!("  - {}", note);
    }

    if result.requires_special_analysis {
        println!();
        println!("  [!] Outside the simplified procedure; special analysis required");
    }
    println!("═══════════════════════════════════════════════════");
}

fn run(args: &Args) -> CalcResult<()> {
    let mut input = match &args.input {
        Some(path) => load_request(path)?,
        None => prompt_request(args)?,
    };
    if args.governing {
        input.settings.internal_pressure_mode = InternalPressureMode::Governing;
    }
    debug!(label = %input.label, method = %input.method, "running calculation");

    let result = compute_zone_pressures(&input)?;

    if !args.json {
        print_report(&input, &result);
        println!();
        println!("JSON Output (for LLM/API use):");
    }
    let json = serde_json::to_string_pretty(&result)?;
    println!("{}", json);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
