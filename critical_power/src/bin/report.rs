use std::error::Error;

use critical_power::{Trial, critical_power, zones};

const POWER_RANGE: std::ops::RangeInclusive<f64> = 0.0..=2000.0;
const TIME_RANGE: std::ops::RangeInclusive<f64> = 1.0..=100000.0;

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Average power for trial 1 (Watts)
    #[arg(long, default_value_t = 300.0, required = false)]
    pub power_1: f64,
    /// Time for trial 1 (seconds)
    #[arg(long, default_value_t = 240.0, required = false)]
    pub time_1: f64,
    /// Average power for trial 2 (Watts)
    #[arg(long, default_value_t = 250.0, required = false)]
    pub power_2: f64,
    /// Time for trial 2 (seconds)
    #[arg(long, default_value_t = 720.0, required = false)]
    pub time_2: f64,
}

fn checked_trial(power: f64, time: f64, name: &str) -> Result<Trial, Box<dyn Error>> {
    if !POWER_RANGE.contains(&power) {
        return Err(format!(
            "Power for {name} must be between {} and {} W",
            POWER_RANGE.start(),
            POWER_RANGE.end()
        )
        .into());
    }

    if !TIME_RANGE.contains(&time) {
        return Err(format!(
            "Time for {name} must be between {} and {} seconds",
            TIME_RANGE.start(),
            TIME_RANGE.end()
        )
        .into());
    }

    Ok(Trial::new(power, time))
}

fn main() -> Result<(), Box<dyn Error>> {
    let Args {
        power_1,
        time_1,
        power_2,
        time_2,
    } = <Args as clap::Parser>::parse();

    let first = checked_trial(power_1, time_1, "trial 1")?;
    let second = checked_trial(power_2, time_2, "trial 2")?;

    if first.time == second.time {
        return Err("Trial times must be different.".into());
    }

    if first.power == second.power {
        return Err("Trial powers must be different.".into());
    }

    let cp =
        critical_power(first, second).map_err(|e| format!("Invalid input for calculation: {e}"))?;

    println!("Critical Power: {cp:.2} W");
    println!();
    println!("Training zones (by % of Critical Power):");

    for zone in zones(cp) {
        println!("{:<16} {}", zone.label(), zone.range_text());
    }

    Ok(())
}
