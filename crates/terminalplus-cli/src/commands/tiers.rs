//! Urgency tier overview command.

use terminalplus_core::{Config, UrgencyTier};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let policy = &config.policy;
    let t = &policy.thresholds;

    println!("=== Urgency Tiers ===\n");
    for tier in UrgencyTier::ALL {
        let window = match tier {
            UrgencyTier::Rush => format!("0 < m <= {}", t.rush_minutes),
            UrgencyTier::Imminent => format!("m <= {} (incl. past)", t.imminent_minutes),
            UrgencyTier::Soon => format!("m <= {}", t.soon_minutes),
            UrgencyTier::Normal => format!("m <= {} (or no flight)", t.normal_minutes),
            UrgencyTier::Extended => format!("m > {}", t.normal_minutes),
        };
        let order: Vec<_> = tier.urgency_order().iter().map(|c| c.as_str()).collect();

        println!("{}", tier);
        println!("  Window: {}", window);
        println!("  Urgency weight: {:.2}", policy.urgency_weights.for_tier(tier));
        println!("  Order: {}", order.join(", "));
        println!("  Status: {}", tier.status_message());
        println!();
    }
    Ok(())
}
