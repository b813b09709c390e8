use std::path::PathBuf;

use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::LevelFilter;

use fertilizer_advisor::calculator::calculate;
use fertilizer_advisor::config::AppConfig;
use fertilizer_advisor::encoder::{CROP_TABLE, SOIL_TABLE};
use fertilizer_advisor::{AdvisorError, FertilizerAdvisor, FertilizerProduct, SoilReadings, batch};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Classification model to use instead of the configured one
    #[arg(short, long, global = true)]
    model: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recommend a fertilizer product and quantities for one set of readings
    Recommend {
        /// Temperature, °C
        #[arg(long)]
        temperature: f64,
        /// Humidity, %
        #[arg(long)]
        humidity: f64,
        /// Soil moisture, %
        #[arg(long)]
        moisture: f64,
        #[arg(long)]
        soil: String,
        #[arg(long)]
        crop: String,
        /// Nitrogen, kg/ha
        #[arg(long)]
        nitrogen: f64,
        /// Potassium, kg/ha
        #[arg(long)]
        potassium: f64,
        /// Phosphorous, kg/ha
        #[arg(long)]
        phosphorous: f64,
    },
    /// Compute Urea, DAP and MOP quantities for a crop
    Calculate {
        #[arg(long)]
        crop: String,
        /// Field size; quantities are per hectare when omitted
        #[arg(long)]
        hectares: Option<f64>,
    },
    /// Produce reports for every request in a JSON lines file
    Batch {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// List the known soil types, crops and fertilizer products
    List,
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig, AdvisorError> {
    match path {
        Some(path) => AppConfig::from_path(path),
        None => Ok(AppConfig::from_local_file()?.unwrap_or_default()),
    }
}

fn build_advisor(model: Option<PathBuf>) -> FertilizerAdvisor {
    match model {
        Some(path) => FertilizerAdvisor::from_model_path_or_fallback(&path),
        None => {
            log::info!("No classification model configured, reporting quantities only");
            FertilizerAdvisor::without_model()
        }
    }
}

fn list() {
    println!("Soil types:");
    for (code, name) in SOIL_TABLE.names().iter().enumerate() {
        println!("  {code} {name}");
    }
    println!("Crop types:");
    for (code, name) in CROP_TABLE.names().iter().enumerate() {
        println!("  {code} {name}");
    }
    println!("Fertilizer products:");
    for product in FertilizerProduct::ALL {
        println!("  {} {}", product.class_index(), product);
    }
}

fn run(cli: Args, config: AppConfig) -> Result<(), AdvisorError> {
    let model = cli.model.or(config.model_path);
    match cli.command {
        Commands::Recommend {
            temperature,
            humidity,
            moisture,
            soil,
            crop,
            nitrogen,
            potassium,
            phosphorous,
        } => {
            let advisor = build_advisor(model);
            let readings = SoilReadings {
                temperature,
                humidity,
                moisture,
                soil_type: soil,
                crop_type: crop,
                nitrogen,
                potassium,
                phosphorous,
            };
            println!("{}", advisor.report(&readings));
        }
        Commands::Calculate { crop, hectares } => {
            let quantities = calculate(&crop)?;
            match hectares {
                Some(hectares) => {
                    if !hectares.is_finite() || hectares <= 0. {
                        return Err(AdvisorError::InvalidUserInput {
                            field: "hectares".to_string(),
                            reason: format!("{hectares} is not a positive area"),
                        });
                    }
                    let total = quantities.scaled(hectares);
                    println!(
                        "Urea: {:.2} kg\nDAP: {:.2} kg\nMOP: {:.2} kg",
                        total.urea, total.dap, total.mop
                    );
                }
                None => println!("{quantities}"),
            }
        }
        Commands::Batch { input } => {
            let advisor = build_advisor(model);
            let reports = batch::run_batch(&advisor, &input)?;
            println!("{}", reports.iter().join("\n\n"));
        }
        Commands::List => list(),
    }
    Ok(())
}

fn main() {
    let cli = Args::parse();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Could not read config, using defaults: {e}");
            AppConfig::default()
        }
    };

    let level = if cli.verbose || config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    colog::default_builder().filter_level(level).init();

    if let Err(e) = run(cli, config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
