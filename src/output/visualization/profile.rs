//! Depth-profile plotting
//!
//! Concentration against depth at one or more fixed times, showing how far
//! the front has penetrated.

use std::error::Error;

use crate::simulation::DepthProfile;
use super::config::{PlotConfig, NO_TITLE};
use super::render::{render_to_file, LineData};

/// Plot concentration vs depth, one labelled line per profile ("Day t")
///
/// # Errors
///
/// Returns `Err` if `profiles` is empty or the backend fails.
pub fn plot_depth_profiles(
    profiles: &[DepthProfile],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profiles.is_empty() {
        return Err("No depth profile provided".into());
    }

    let default_config = PlotConfig::depth_profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let lines: Vec<LineData> = profiles
        .iter()
        .map(|profile| LineData {
            label: profile.label(),
            points: profile.points().collect(),
        })
        .collect();

    render_to_file(output_path, &lines, config)
}
