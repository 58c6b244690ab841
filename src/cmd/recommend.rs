use crate::reports;
use ballforge::api;
use ballforge::config::Config;
use ballforge::context::Context;
use ballforge::error::BfResult;
use ballforge::inventory::Inventory;
use ballforge::scorer::Scorer;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub config: Config,

    /// Print the full report as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: RecommendArgs, inventory: &Inventory, debug: bool) -> BfResult<()> {
    let rec = api::recommend(inventory, &args.config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
        return Ok(());
    }

    println!("\n🎳 === RECOMMENDED ARSENAL === 🎳");
    reports::print_lane_summary(&rec.lane);
    reports::print_arsenal(&rec);

    if debug {
        let ctx = Context::from_params(&args.config.session, &args.config.thresholds);
        let scorer = Scorer::new(args.config.weights.clone());
        println!();
        for p in &rec.picks {
            if let Some(ball) = inventory.find(&p.ball.name) {
                let details = scorer.score_debug(ball, &ctx, p.role);
                reports::print_score_details(&ball.name, &details);
            }
        }
    }

    reports::print_also_considered(&rec.also_considered);
    reports::print_rejections(&rec.rejected);
    Ok(())
}
