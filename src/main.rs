use anyhow::{Result, anyhow};
use fare_predictor::config::AppConfig;
use fare_predictor::data::TripForm;
use fare_predictor::predict::render_outcome;
use fare_predictor::{bootstrap, visual};
use std::env;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    let program = env::args().next().unwrap_or_default();
    println!("Usage:");
    println!("  {}            open the fare form", program);
    println!("  {} gui        open the fare form", program);
    println!(
        "  {} predict <passenger_count> <pickup_lat> <pickup_lon> <dropoff_lat> <dropoff_lon> <hour> <day> <month> <year>",
        program
    );
    println!("\nExample:");
    println!(
        "  {} predict 2 40.7128 -74.0060 40.7306 -73.9352 14 10 6 2013",
        program
    );
    println!("\nThe model is read from $FARE_MODEL_PATH (default: random_forest_pipeline.json).");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries the prediction; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env();
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("gui") => {
            let handler = bootstrap(&config)?;
            visual::run_app(&config, handler).map_err(|e| anyhow!("GUI failed: {}", e))?;
        }

        Some("predict") => {
            if args.len() != 11 {
                println!("Error: predict needs exactly 9 values");
                print_usage();
                return Ok(());
            }

            let handler = bootstrap(&config)?;
            let outcome = TripForm::from_args(&args[2..]).and_then(|form| handler.predict_form(&form));
            println!("{}", render_outcome(&outcome));
        }

        Some(other) => {
            println!("Unknown command: {}", other);
            print_usage();
        }
    }

    Ok(())
}
