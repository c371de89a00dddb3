//! Example: Penetration of the front over time
//!
//! Concentration against depth at days 10, 50, 100 and 200 for the default
//! source and dispersion.
//!
//! ```bash
//! cargo run --example depth_profile
//! ```

use contam_rs::output::{plot_depth_profiles, PlotConfig};
use contam_rs::simulation::{compute_depth_profile, depth_grid, DepthProfile, SimulationParameters};

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Depth profiles ===\n");

    let params = SimulationParameters::default();
    let model = params.model()?;
    let grid = depth_grid(150.0, 301)?;

    let profiles = [10.0, 50.0, 100.0, 200.0]
        .iter()
        .map(|&day| compute_depth_profile(&params, day, &grid))
        .collect::<Result<Vec<DepthProfile>, _>>()?;

    for profile in &profiles {
        // deepest point still above 1% of the source
        let front = profile
            .points()
            .filter(|&(_, c)| c >= 0.01 * params.initial_concentration)
            .map(|(z, _)| z)
            .fold(0.0, f64::max);
        println!(
            "  day {:>3}: spreading length {:>5.1} cm, C > 1% down to {:>5.1} cm",
            profile.time(),
            model.spreading_length(profile.time())?,
            front
        );
    }

    let path = "depth_profile.svg";
    plot_depth_profiles(&profiles, path, Some(&PlotConfig::depth_profile("Front penetration")))?;
    println!("\nchart: {path}");

    Ok(())
}
