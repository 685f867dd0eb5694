//! route-cli — optimize a delivery route from a CSV of stops.
//!
//! ```text
//! route-cli --stops demos/route-cli/data/mobile_al.csv --return-to-depot -v
//! route-cli --stops stops.csv --start 4 --algorithm dijkstra_chain --json
//! route-cli --stops stops.csv --path 2,7
//! ```
//!
//! See `ro_optimizer::loader` for the CSV format.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info, trace};

use ro_core::StopId;
use ro_optimizer::{OptimizationResult, OptimizerConfig, RouteOptimizer, load_stops_csv};
use ro_tour::Algorithm;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// CSV file with `id,latitude,longitude,is_depot,label` rows.
    #[arg(short, long, value_name = "CSV")]
    stops: PathBuf,

    /// Start stop id.  Defaults to the first stop flagged `is_depot`, else
    /// the first row.
    #[arg(long, value_name = "ID")]
    start: Option<StopId>,

    /// `nearest_neighbor` or `dijkstra_chain`.
    #[arg(short, long, default_value_t = Algorithm::NearestNeighbor.as_str().to_owned())]
    algorithm: String,

    #[arg(short, long)]
    return_to_depot: bool,

    /// Print the shortest path between two stops (`FROM,TO`) instead of a tour.
    #[arg(long, value_delimiter = ',', value_name = "FROM,TO")]
    path: Vec<StopId>,

    /// Emit the result as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tracing_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(std::io::stderr)
        .init();
    debug!("Verbose level: {}", cli.verbose);

    let stops = load_stops_csv(&cli.stops)
        .with_context(|| format!("loading stops from {}", cli.stops.display()))?;
    info!("Loaded {} stops from {:?}", stops.len(), cli.stops);

    let config = OptimizerConfig::named(&cli.algorithm, cli.return_to_depot)?;
    trace!("Config: {:?}", config);
    let optimizer = RouteOptimizer::new(config);

    if !cli.path.is_empty() {
        let &[from, to] = cli.path.as_slice() else {
            bail!("--path takes exactly two stop ids, got {}", cli.path.len());
        };
        let path = optimizer.shortest_path(&stops, from, to)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&path)?);
        } else {
            for stop in &path.locations {
                println!("{stop}");
            }
            println!("distance: {:.3} km", path.distance_km);
        }
        return Ok(());
    }

    let result = match cli.start {
        Some(start) => optimizer.optimize(&stops, start)?,
        None => optimizer.optimize_auto(&stops)?,
    };
    info!(
        "Optimized {} deliveries with {}: {:.3} km",
        result.delivery_count(),
        result.algorithm,
        result.total_distance_km
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_table(&result);
    }
    Ok(())
}

fn print_table(result: &OptimizationResult) {
    println!("{:>4}  {:>8}  {:>10}  {:>11}  label", "#", "stop", "latitude", "longitude");
    let mut cumulative = 0.0;
    for (i, stop) in result.locations.iter().enumerate() {
        if i > 0 {
            cumulative += result.locations[i - 1].distance_km(stop);
        }
        println!(
            "{:>4}  {:>8}  {:>10.5}  {:>11.5}  {}  ({cumulative:.3} km)",
            i,
            stop.id.get(),
            stop.lat(),
            stop.lon(),
            stop.label.as_deref().unwrap_or("-"),
        );
    }
    println!(
        "total: {:.3} km via {}{}",
        result.total_distance_km,
        result.algorithm,
        if result.is_closed() { " (round trip)" } else { "" }
    );
}
