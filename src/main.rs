use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::time::Duration;

use tasking_feasibility::aoi::{
    estimated_cost_usd, validate_size, Aoi, DEFAULT_COST_PER_SQ_KM_USD,
};
use tasking_feasibility::feasibility::{
    parse_window_date, try_calculate_feasibility, FeasibilityResult, SensorType,
};
use tasking_feasibility::web::api::feasibility::AoiFeasibilityResponse;
use tasking_feasibility::web::{run_server, Config};

const SECONDS_PER_DAY: u64 = 86_400;

#[derive(Parser)]
#[command(name = "tasking-feasibility")]
#[command(about = "Satellite tasking feasibility estimates")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate passes and feasibility for a single point
    Estimate {
        #[arg(long)]
        sensor: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Window start, YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// Window end (inclusive), YYYY-MM-DD
        #[arg(long, conflicts_with = "window", required_unless_present = "window")]
        end: Option<String>,
        /// Window length instead of an end date, e.g. "10days"
        #[arg(long, value_parser = humantime::parse_duration)]
        window: Option<Duration>,
        #[arg(long)]
        json: bool,
    },
    /// Area, cost and feasibility for a polygon, targeted at its centroid
    Aoi {
        #[arg(long)]
        sensor: String,
        /// "lat,lon; lat,lon; lat,lon"
        #[arg(long, allow_hyphen_values = true)]
        points: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long, default_value_t = DEFAULT_COST_PER_SQ_KM_USD)]
        cost_per_sq_km: f64,
        #[arg(long)]
        json: bool,
    },
    /// List sensor types with their pass-rate model
    Sensors,
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "config.yaml")]
        config: String,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            sensor,
            lat,
            lon,
            start,
            end,
            window,
            json,
        } => {
            let end = match end {
                Some(end) => end,
                None => match window_end(&start, window.unwrap_or_default()) {
                    Ok(end) => end,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                },
            };
            estimate(&sensor, lat, lon, &start, &end, json)
        }
        Commands::Aoi {
            sensor,
            points,
            start,
            end,
            cost_per_sq_km,
            json,
        } => aoi(&sensor, &points, &start, &end, cost_per_sq_km, json),
        Commands::Sensors => sensors(),
        Commands::Serve { config } => serve(&config),
    }
}

/// Inclusive end date for a window of whole days starting at `start`.
fn window_end(start: &str, window: Duration) -> Result<String, String> {
    let days = window.as_secs() / SECONDS_PER_DAY;
    if days == 0 {
        return Err(format!(
            "window must cover at least one day, got {}",
            humantime::format_duration(window)
        ));
    }
    let start = parse_window_date("start", start).map_err(|e| e.to_string())?;
    let end = start
        .checked_add_days(chrono::Days::new(days - 1))
        .ok_or_else(|| format!("window too long: {} days", days))?;
    Ok(end.format("%Y-%m-%d").to_string())
}

fn estimate(sensor: &str, lat: f64, lon: f64, start: &str, end: &str, json: bool) -> ExitCode {
    match try_calculate_feasibility(Some(sensor), lat, lon, Some(start), Some(end)) {
        Ok(result) => {
            if json {
                print_json(&result)
            } else {
                print_result(&result);
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Cannot estimate feasibility: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn aoi(
    sensor: &str,
    points: &str,
    start: &str,
    end: &str,
    cost_per_sq_km: f64,
    json: bool,
) -> ExitCode {
    let aoi = match Aoi::parse(points) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Invalid AOI: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let centroid = aoi.centroid();
    let feasibility = match try_calculate_feasibility(
        Some(sensor),
        centroid.latitude,
        centroid.longitude,
        Some(start),
        Some(end),
    ) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Cannot estimate feasibility: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let area_sq_km = aoi.area_sq_km();
    let response = AoiFeasibilityResponse {
        area_sq_km,
        estimated_cost_usd: estimated_cost_usd(area_sq_km, cost_per_sq_km),
        size: validate_size(area_sq_km),
        centroid,
        feasibility,
    };

    if json {
        return print_json(&response);
    }

    println!("Area:            {:.2} sq km", response.area_sq_km);
    println!("Estimated cost:  ${:.2}", response.estimated_cost_usd);
    println!(
        "AOI size:        {:?}, {}",
        response.size.level, response.size.message
    );
    for p in &response.size.providers {
        println!("  {:<12} {}", p.provider, p.reason);
    }
    print_result(&response.feasibility);
    ExitCode::SUCCESS
}

fn sensors() -> ExitCode {
    println!(
        "{:<8} {:>9} {:>10} {:>6} {:>6}  {}",
        "SENSOR", "BASE/DAY", "EXCELLENT", "GOOD", "FAIR", "AIR TRAFFIC"
    );
    for p in SensorType::profiles() {
        println!(
            "{:<8} {:>9.1} {:>10.1} {:>6.1} {:>6.1}  {}",
            p.sensor.to_string(),
            p.base_daily_rate,
            p.thresholds.excellent,
            p.thresholds.good,
            p.thresholds.fair,
            if p.air_traffic_dependent { "yes" } else { "no" }
        );
    }
    ExitCode::SUCCESS
}

fn serve(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_result(r: &FeasibilityResult) {
    println!("Sensor:          {}", r.sensor_type);
    println!("Target:          {:.4}, {:.4}", r.latitude, r.longitude);
    println!("Window:          {}", r.date_range);
    println!("Expected passes: {}", r.expected_passes);
    println!("Feasibility:     {} ({})", r.level, r.level.color_hex());
    println!("{}", r.explanation);
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{}", s);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error encoding JSON: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("2024-01-01", "10days", "2024-01-10")]
    #[case("2024-01-01", "1day", "2024-01-01")]
    #[case("2024-02-20", "2weeks", "2024-03-04")]
    #[case("2024-01-01", "36h", "2024-01-01")]
    fn test_window_end(#[case] start: &str, #[case] window: &str, #[case] end: &str) {
        let window = humantime::parse_duration(window).unwrap();
        assert_eq!(end, window_end(start, window).unwrap());
    }

    #[rstest]
    #[case("2024-01-01", "12h")]
    #[case("2024-13-01", "2days")]
    #[case("2024-01-01", "1000000years")]
    fn test_window_end_bad(#[case] start: &str, #[case] window: &str) {
        let window = humantime::parse_duration(window).unwrap();
        assert!(window_end(start, window).is_err());
    }

    #[test]
    fn test_cli_parses_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "tasking-feasibility",
            "estimate",
            "--sensor",
            "EO",
            "--lat",
            "-33.9",
            "--lon",
            "-70.6",
            "--start",
            "2024-01-01",
            "--window",
            "7days",
        ])
        .unwrap();
        match cli.command {
            Commands::Estimate { lat, lon, end, window, .. } => {
                assert_eq!(-33.9, lat);
                assert_eq!(-70.6, lon);
                assert!(end.is_none());
                assert_eq!(Some(Duration::from_secs(7 * SECONDS_PER_DAY)), window);
            }
            _ => panic!("expected estimate"),
        }
    }

    #[test]
    fn test_cli_needs_end_or_window() {
        let r = Cli::try_parse_from([
            "tasking-feasibility",
            "estimate",
            "--sensor",
            "EO",
            "--lat",
            "1",
            "--lon",
            "1",
            "--start",
            "2024-01-01",
        ]);
        assert!(r.is_err());
    }
}
