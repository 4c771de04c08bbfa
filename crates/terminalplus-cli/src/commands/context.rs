//! Vibe context command: ranked categories and boosts for a moment in time.

use chrono::Duration;
use clap::Args;

use terminalplus_core::{BoostProfile, Config, ContextEngine, ContextSnapshot, VibeContext};

use crate::common::{now, parse_time};

#[derive(Args)]
pub struct ContextArgs {
    /// Evaluate at this time (HH:MM or RFC 3339) instead of now
    #[arg(long)]
    at: Option<String>,
    /// Minutes until boarding
    #[arg(long, conflicts_with = "boarding_at", allow_hyphen_values = true)]
    boarding_in: Option<i64>,
    /// Boarding time (HH:MM on the evaluated day, or RFC 3339)
    #[arg(long)]
    boarding_at: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ContextArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let engine = ContextEngine::from_config(&config)?;

    let current = now(&config);
    let at = match args.at.as_deref() {
        Some(value) => parse_time(value, current)?,
        None => current,
    };
    let deadline = match (args.boarding_in, args.boarding_at.as_deref()) {
        (Some(minutes), _) => Some(
            Duration::try_minutes(minutes)
                .and_then(|offset| at.checked_add_signed(offset))
                .ok_or_else(|| format!("--boarding-in {} is out of range", minutes))?,
        ),
        (None, Some(value)) => Some(parse_time(value, at)?),
        (None, None) => None,
    };

    tracing::debug!(at = %at, deadline = ?deadline, "resolved context times");
    let snapshot = ContextSnapshot::new(at, deadline);
    let report = engine.report(&snapshot);

    if args.json || config.display.json_output {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    print_context(&snapshot, &report.context, &report.boosts);
    Ok(())
}

fn print_context(snapshot: &ContextSnapshot, context: &VibeContext, boosts: &BoostProfile) {
    println!(
        "=== {} ({}) - {} ===",
        context.day_part,
        context.tone,
        snapshot.now.format("%H:%M")
    );
    println!("{}", context.message);

    if let Some(status) = context.boarding_message {
        println!();
        let urgency = if context.is_urgent { " [URGENT]" } else { "" };
        println!("Boarding: {}{}", context.tier, urgency);
        println!("  {}", status);
        if let Some(ref countdown) = context.countdown {
            println!("  {}", countdown);
        }
        if context.boarding_closed {
            println!("  Boarding time has passed.");
        }
    }

    println!("\nVibe order:");
    for (i, category) in context.order.iter().enumerate() {
        let marker = if context.highlighted.contains(category) {
            "*"
        } else {
            " "
        };
        let top = if i < context.priority.len() { "top" } else { "" };
        println!(
            "  {}. {:<9} x{:.2} {} {}",
            i + 1,
            category.label(),
            boosts.get(*category),
            marker,
            top
        );
    }
}
