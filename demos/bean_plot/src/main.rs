//! bean_plot: a season on a small mixed plot.
//!
//! One farmer plants a row of the best-suited crop on a 6 × 4 plot, waters
//! it weekly, and harvests every ten days from day 50.  The run is hourly
//! for 90 days and writes `step_summaries.csv` and `action_events.csv` to
//! `output/bean_plot`.
//!
//! ```text
//! cargo run -p bean_plot --release [-- path/to/config.json]
//! RUST_LOG=ag_env=debug cargo run -p bean_plot
//! ```

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use ag_action::{Action, ActionKind};
use ag_agent::{optimal_plants, qualified_plants};
use ag_core::{Climate, ClimateZone, Coordinate, EnvConfig, Location, MinMax, ResourceKind, ResourceList};
use ag_env::EnvironmentBuilder;
use ag_output::{CsvWriter, EnvOutputObserver};
use ag_server::AgentServer;
use ag_terrain::load_terrain_reader;

// ── Constants ─────────────────────────────────────────────────────────────────

const FARMER:         &str = "farmer";
const SIM_DAYS:       u64  = 90;
const DAY_SECS:       u64  = 86_400;
const WATER_MM:       f64  = 12.0;
const OUTPUT_DIR:     &str = "output/bean_plot";

// 6 × 4 plot; the bottom row is drier sandy soil.
const TERRAIN_CSV: &str = "\
x,y,water_content,field_capacity,plant\n\
0,0,22,40,\n1,0,22,40,\n2,0,22,40,\n3,0,22,40,\n4,0,22,40,\n5,0,22,40,\n\
0,1,24,42,\n1,1,24,42,\n2,1,24,42,\n3,1,24,42,\n4,1,24,42,\n5,1,24,42,\n\
0,2,24,42,\n1,2,24,42,\n2,2,24,42,\n3,2,24,42,\n4,2,24,42,\n5,2,24,42,Squash\n\
0,3,12,25,\n1,3,12,25,\n2,3,12,25,\n3,3,12,25,\n4,3,12,25,\n5,3,12,25,\n\
";

// ── Configuration ─────────────────────────────────────────────────────────────

fn default_config() -> EnvConfig {
    EnvConfig {
        name:             "bean_plot".into(),
        location:         Location::new(14.20, 14.22, 37.51, 37.49),
        climate:          Climate {
            zone:               ClimateZone::Temperate,
            yearly_temperature: MinMax::new(14.0, 28.0),
            yearly_rainfall:    MinMax::new(600.0, 900.0),
        },
        start_unix_secs:  1_711_929_600, // 2024-04-01 00:00 UTC
        step_length_secs: 3_600,
        seed:             42,
        max_jump_steps:   Some(24 * 7),
    }
}

fn load_config() -> Result<EnvConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
        }
        None => Ok(default_config()),
    }
}

fn resources(pairs: &[(ResourceKind, u64)]) -> ResourceList {
    pairs.iter().copied().collect()
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    println!("=== bean_plot (agro_twin) ===");
    println!(
        "Env: {}  |  Days: {SIM_DAYS}  |  Step: {} s  |  Seed: {}",
        config.name, config.step_length_secs, config.seed
    );

    // 1. Pick a crop for the climate.
    let optimal = optimal_plants(&config.climate);
    let qualified = qualified_plants(&config.climate);
    println!("Qualified plants: {qualified:?}  |  optimal: {optimal:?}");
    let crop = optimal
        .first()
        .or_else(|| qualified.iter().find(|&&name| name == "Bean"))
        .or_else(|| qualified.first())
        .copied()
        .context("no plant type tolerates this climate")?;
    println!("Planting: {crop}");

    // 2. Register the environment and the farmer.
    let terrain = load_terrain_reader(Cursor::new(TERRAIN_CSV))?;
    let env_name = config.name.clone();
    let server = AgentServer::new();
    server.register(EnvironmentBuilder::new(config).terrain(terrain))?;
    server.create_agent(
        FARMER,
        &env_name,
        &resources(&[
            (ResourceKind::Seed, 6),
            (ResourceKind::Water, 200),
            (ResourceKind::Labor, 40),
        ]),
    )?;

    // 3. Plan the season in wall-clock time.
    let clock = server.with_environment(&env_name, |env| env.clock().clone())?;
    let start = clock.start_unix_secs;
    let row: Vec<Coordinate> = (0..6).map(|x| Coordinate::new(x, 1)).collect();
    let day = |d: u64| start + (d * DAY_SECS) as i64;

    let mut plan = vec![
        Action::at_time(&clock, ActionKind::add(crop)?, row.clone(), day(0) + 7 * 3_600, 2 * 3_600)?
            .with_cost(resources(&[(ResourceKind::Seed, 6), (ResourceKind::Labor, 2)])),
    ];
    for week in 1..(SIM_DAYS / 7) {
        plan.push(
            Action::at_time(&clock, ActionKind::water(WATER_MM)?, row.clone(), day(week * 7) + 6 * 3_600, 3_600)?
                .with_cost(resources(&[(ResourceKind::Water, 12), (ResourceKind::Labor, 1)])),
        );
    }
    for d in (50..SIM_DAYS).step_by(10) {
        plan.push(
            Action::at_time(&clock, ActionKind::Harvest, row.clone(), day(d) + 8 * 3_600, 4 * 3_600)?
                .with_cost(resources(&[(ResourceKind::Labor, 2)])),
        );
    }

    let mut submitted = 0;
    for action in plan {
        match server.agent_take_action(FARMER, action) {
            Ok(_) => submitted += 1,
            Err(e) => warn!(status = %e.status(), "action not taken: {e}"),
        }
    }
    println!("Submitted {submitted} actions; farmer now holds {:?}", server.agent_resources(FARMER)?);
    println!();

    // 4. Run, one week per jump.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut obs = EnvOutputObserver::new(CsvWriter::new(Path::new(OUTPUT_DIR))?);

    let t0 = Instant::now();
    let total_steps = clock.steps_for_days(SIM_DAYS);
    let week_steps = clock.steps_for_days(7) as i64;
    server.with_environment(&env_name, |env| -> Result<()> {
        while env.current_time_step().0 < total_steps {
            let remaining = (total_steps - env.current_time_step().0) as i64;
            env.jump_forward_time_step_with(remaining.min(week_steps), &mut obs)?;
            info!(now = %env.clock(), plants = env.terrain().plant_count(), "week done");
        }
        Ok(())
    })??;
    obs.finish();
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    server.with_environment(&env_name, |env| {
        println!("Simulation complete in {:.3} s at {}", elapsed.as_secs_f64(), env.clock());
        println!();
        println!("{}", env.terrain());

        println!("{:<8} {:<8} {:<10} {:>8} {:>7}", "Cell", "Type", "Maturity", "GDD", "Health");
        println!("{}", "-".repeat(45));
        for plant in env.terrain().plants() {
            println!(
                "{:<8} {:<8} {:<10} {:>8.1} {:>7}",
                plant.position().to_string(),
                plant.type_name(),
                plant.maturity().to_string(),
                plant.accumulated_gdd(),
                plant.health(),
            );
        }

        let harvested = env.terrain().harvested();
        let grams: f64 = harvested.iter().map(|h| h.weight_g).sum();
        println!();
        println!("Harvested {} pieces, {:.0} g total", harvested.len(), grams);
    })?;

    Ok(())
}
