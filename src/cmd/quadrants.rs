use crate::reports;
use ballforge::config::Thresholds;
use ballforge::inventory::Inventory;
use ballforge::quadrant::{classify, on_chart};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct QuadrantsArgs {
    #[command(flatten)]
    pub thresholds: Thresholds,

    /// Only show balls whose name contains this text.
    #[arg(short, long)]
    pub ball: Option<String>,
}

pub fn run(args: QuadrantsArgs, inventory: &Inventory) {
    println!("\n📈 === RG / DIFF QUADRANTS === 📈");
    let rows: Vec<_> = inventory
        .balls
        .iter()
        .filter(|b| match &args.ball {
            Some(filter) => b.name.to_lowercase().contains(&filter.to_lowercase()),
            None => true,
        })
        .map(|b| (b, classify(b.rg, b.diff, b.core.int_diff(), &args.thresholds)))
        .collect();

    reports::print_quadrant_table(&rows);

    let off_chart: Vec<&str> = rows
        .iter()
        .filter(|(b, _)| !on_chart(b.rg, b.diff, &args.thresholds))
        .map(|(b, _)| b.name.as_str())
        .collect();
    if !off_chart.is_empty() {
        println!("Outside the chart window: {}", off_chart.join(", "));
    }
    reports::print_rejections(&inventory.rejected);
}
