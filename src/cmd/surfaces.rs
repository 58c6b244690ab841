use crate::reports;
use ballforge::config::Thresholds;
use ballforge::lanes::get_all_surfaces;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SurfacesArgs {
    #[command(flatten)]
    pub thresholds: Thresholds,
}

pub fn run(args: SurfacesArgs) {
    println!("\n🛣️  === LANE SURFACES === 🛣️");
    reports::print_surface_table(&get_all_surfaces(), &args.thresholds);
}
