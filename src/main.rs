use ballforge::config::ScoringWeights;
use ballforge::inventory::{load_inventory_from_path, Inventory};
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(
        global = true,
        short,
        long,
        default_value = "data/bowling_balls.csv"
    )]
    inventory: String,

    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pick fresh, transition and burned balls for the session.
    Recommend(cmd::recommend::RecommendArgs),
    /// Place every ball on the RG / Diff chart.
    Quadrants(cmd::quadrants::QuadrantsArgs),
    /// List the lane surface catalog.
    Surfaces(cmd::surfaces::SurfacesArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Surfaces(args) => cmd::surfaces::run(args),
        Commands::Recommend(mut args) => {
            let inventory = load_or_exit(&cli.inventory);

            if let Some(path) = &cli.weights {
                info!("⚖️  Loading Weights from: {}", path);
                let mut file_weights = ScoringWeights::load_from_file(path).unwrap_or_else(|e| {
                    error!("{}", e);
                    process::exit(1);
                });
                // Explicit flags still win over the file.
                if let Some(sub) = matches.subcommand_matches("recommend") {
                    file_weights.merge_from_cli(&args.config.weights, sub);
                }
                args.config.weights = file_weights;
            } else {
                info!("No external weights loaded. Using the reference policy.");
            }

            // Flags bypass load_from_file, so check the merged result.
            if let Err(e) = args.config.weights.validate() {
                error!("❌ {}", e);
                process::exit(1);
            }

            if let Err(e) = cmd::recommend::run(args, &inventory, cli.debug) {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
        Commands::Quadrants(args) => {
            let inventory = load_or_exit(&cli.inventory);
            if cli.weights.is_some() {
                warn!("--weights has no effect on quadrant classification");
            }
            cmd::quadrants::run(args, &inventory);
        }
    }
}

fn load_or_exit(path: &str) -> Inventory {
    load_inventory_from_path(path).unwrap_or_else(|e| {
        error!("❌ Could not load inventory '{}': {}", path, e);
        process::exit(1);
    })
}
