use std::{fs::File, io::Write, path::PathBuf};

use critical_power::{Trial, critical_power, zones};

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
struct TrialsCsv {
    power_1: f64,
    time_1: f64,
    power_2: f64,
    time_2: f64,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    critical_power: f64,
    z1: String,
    z2: String,
    z3: String,
    z4: String,
    z5: String,
    z6: String,
}

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input csv file with one trial pair per row: power_1,time_1,power_2,time_2
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("input.csv"), required = false)]
    pub input: PathBuf,
    /// Output csv file. _Note_: will truncate old file if exists
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("output.csv"), required = false)]
    pub output: PathBuf,
    /// Don't save changes
    #[arg(short, long, default_value_t = false, required = false)]
    pub dry: bool,
    /// Print result to stdout
    #[arg(short, long, default_value_t = false, required = false)]
    pub print: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args {
        input,
        output,
        dry,
        print,
    } = <Args as clap::Parser>::parse();

    let mut rdr = csv::Reader::from_reader(
        File::open(input).map_err(|e| format!("Failed to read input file. Reason: {e}"))?,
    );

    let mut wrt = csv::Writer::from_path(&output);

    let data = rdr
        .deserialize::<TrialsCsv>()
        .filter_map(|this| this.ok())
        .collect::<Vec<_>>();

    let total_data = data.len();

    println!("Total: {total_data} records",);

    let mut io = match print {
        true => {
            let io = std::io::stdout();

            let mut io = io.lock();

            io.write_all("critical_power,z1,z2,z3,z4,z5,z6\n".as_bytes())?;

            Some(io)
        }
        false => None,
    };

    let mut skipped = 0_usize;

    for TrialsCsv {
        power_1,
        time_1,
        power_2,
        time_2,
    } in data
    {
        let first = Trial::new(power_1, time_1);
        let second = Trial::new(power_2, time_2);

        // Same preconditions the interactive report enforces
        if first.time == second.time || first.power == second.power {
            skipped += 1;
            continue;
        }

        let Ok(cp) = critical_power(first, second) else {
            skipped += 1;
            continue;
        };

        let [z1, z2, z3, z4, z5, z6] = zones(cp).map(|zone| zone.range_text());

        if let Some(io) = &mut io {
            io.write_fmt(format_args!(
                "{cp},{z1},{z2},{z3},{z4},{z5},{z6}\n"
            ))?;
        }

        if dry {
            continue;
        }

        if let Ok(wrt) = &mut wrt {
            wrt.serialize(Report {
                critical_power: cp,
                z1,
                z2,
                z3,
                z4,
                z5,
                z6,
            })?;
        }
    }

    if skipped > 0 {
        println!("Skipped: {skipped} records with equal trial times or powers");
    }

    if !dry {
        println!("Saving to {}", output.to_string_lossy());
        wrt?.flush()?;
    }

    println!("Done!");

    Ok(())
}
