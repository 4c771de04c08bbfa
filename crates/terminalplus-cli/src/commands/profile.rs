//! Day-part profile command.

use chrono::Timelike;
use clap::Args;

use terminalplus_core::{profile_for_hour, Config, DayPart};

use crate::common::now;

#[derive(Args)]
pub struct ProfileArgs {
    /// Local hour (0-23), defaults to the current hour
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    hour: Option<u32>,
    /// List every day part
    #[arg(long, conflicts_with = "hour")]
    all: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ProfileArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let json = args.json || config.display.json_output;

    let profiles: Vec<_> = if args.all {
        DayPart::ALL.iter().map(|part| part.profile()).collect()
    } else {
        let hour = args.hour.unwrap_or_else(|| now(&config).hour());
        vec![profile_for_hour(hour)]
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    for profile in profiles {
        println!("{} ({})", profile.label(), profile.tone);
        println!("  {}", profile.greeting);
        let order: Vec<_> = profile.base_order.iter().map(|c| c.as_str()).collect();
        println!("  Order: {}", order.join(", "));
    }
    Ok(())
}
