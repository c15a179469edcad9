use anyhow::{Context, Result};
use tracing::info;

use monty_hall::config::{Config, ReportFormat};
use monty_hall::infra::{init_tracing, DeterministicRng, SystemRng};
use monty_hall::{Simulation, SimulationRun};

fn main() -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(config.log_format);

    info!(
        service = "monty_hall_sim",
        version = env!("CARGO_PKG_VERSION"),
        trials = config.trials,
        seed = ?config.seed,
        "Starting Monty Hall simulation"
    );

    let simulation = Simulation::new(config.trials);

    // С seed прогон воспроизводим, без него – системный RNG.
    let run: SimulationRun = match config.seed {
        Some(seed) => simulation.run(&mut DeterministicRng::from_u64(seed))?,
        None => simulation.run(&mut SystemRng)?,
    };

    let report = run.report();
    match config.report_format {
        ReportFormat::Text => {
            println!("MontyHall: {} trials in {}ms", report.trials, run.elapsed().as_millis());
            print!("{report}");
        }
        ReportFormat::Json => {
            println!("{}", report.to_json().context("failed to serialize report")?);
        }
    }

    Ok(())
}
