pub mod agglomerative;
pub mod blur;
pub mod competitive;
pub mod config;
pub mod gradient;
pub mod info;
pub mod run;

use anyhow::Result;
use basin_core::visualize::ColorStrategy;

/// Parse a `--colors` flag value.
pub fn parse_color_strategy(s: &str) -> Result<ColorStrategy> {
    match s {
        "hashed" => Ok(ColorStrategy::Hashed),
        "random" => Ok(ColorStrategy::Random),
        other => anyhow::bail!("Unknown color strategy '{other}' (expected 'hashed' or 'random')"),
    }
}
