//! Boost profile command.

use clap::Args;

use terminalplus_core::{boosts_with, Config, UrgencyTier};

#[derive(Args)]
pub struct BoostsArgs {
    /// Urgency tier (rush, imminent, soon, normal, extended)
    #[arg(long)]
    tier: UrgencyTier,
    /// Local hour (0-23); hour adjustments are skipped when omitted
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    hour: Option<u32>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: BoostsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let profile = boosts_with(&config.policy, args.tier, args.hour);

    if args.json || config.display.json_output {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    match args.hour {
        Some(hour) => println!("Boosts for {} at {:02}:00", args.tier, hour),
        None => println!("Boosts for {}", args.tier),
    }
    for (category, factor) in profile.iter() {
        let trend = if factor > 1.0 {
            "+"
        } else if factor < 1.0 {
            "-"
        } else {
            " "
        };
        println!("  {:<9} x{:.2} {}", category.label(), factor, trend);
    }
    Ok(())
}
