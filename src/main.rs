//! Lunar Descent headless demo
//!
//! Plays a few levels with the demo autopilot and prints the gauges.
//!
//! Usage: `lunar-descent [difficulty] [tick-ms]`
//! Settings are read from `$LUNAR_DESCENT_SETTINGS` when set.

use std::path::PathBuf;
use std::time::Duration;

use crossbeam_channel::Sender;

use lunar_descent::pilot::DemoPilot;
use lunar_descent::sim::{Decision, Difficulty, LevelReport, Telemetry};
use lunar_descent::{AttemptInfo, IntervalDriver, LevelEngine, LevelObserver, Settings};

/// Levels cleared before the demo cancels
const DEMO_LEVELS: u32 = 3;
/// Retries allowed per failed level
const DEMO_RETRIES: u32 = 2;

/// Console front end: prints gauges, lets the pilot fly, picks menu options
struct ConsoleObserver {
    pilot: Option<DemoPilot>,
    cleared: u32,
    retries: u32,
    done: Sender<u32>,
}

impl LevelObserver for ConsoleObserver {
    fn on_tick(&mut self, telemetry: &Telemetry) {
        println!(
            "  alt {:>5} m | speed {:>4} m/s | fuel {:>3} l | limit {} | {:>5.1}%",
            telemetry.altitude,
            telemetry.speed,
            telemetry.fuel,
            telemetry.max_safe_speed,
            telemetry.progress * 100.0
        );
        if let Some(pilot) = self.pilot.as_mut() {
            if pilot.react(telemetry) {
                println!("  >> thrust");
            }
        }
    }

    fn on_level_end(&mut self, report: &LevelReport) -> Decision {
        println!("{}", report.message);

        let decision = if report.success() {
            self.cleared += 1;
            self.retries = 0;
            if self.cleared < DEMO_LEVELS {
                Decision::NextLevel
            } else {
                Decision::Cancel
            }
        } else if self.retries < DEMO_RETRIES {
            self.retries += 1;
            Decision::RetryLevel
        } else {
            Decision::Cancel
        };

        println!("-> {}", decision.as_str());
        if decision == Decision::Cancel {
            let _ = self.done.send(self.cleared);
        }
        decision
    }

    fn on_attempt_started(&mut self, attempt: &AttemptInfo) {
        println!("\n{}Pronto?", attempt.title);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lunar Descent (native) starting...");

    let mut settings = std::env::var_os("LUNAR_DESCENT_SETTINGS")
        .map(PathBuf::from)
        .map(|path| Settings::load_or_default(&path))
        .unwrap_or_default();

    let mut args = std::env::args().skip(1);
    if let Some(arg) = args.next() {
        match Difficulty::from_str(&arg) {
            Some(difficulty) => settings.difficulty = difficulty,
            None => log::warn!("Unknown difficulty '{}', using {}", arg, settings.difficulty.as_str()),
        }
    }
    if let Some(arg) = args.next() {
        match arg.parse::<u64>() {
            Ok(ms) if ms > 0 => settings.tick_interval_ms = ms,
            _ => log::warn!("Ignoring tick interval '{}'", arg),
        }
    }

    println!(
        "Flying the {} ({})",
        settings.difficulty.vessel_name(),
        settings.difficulty.as_str()
    );

    let (done, finished) = crossbeam_channel::bounded(1);
    let mut engine = LevelEngine::new(ConsoleObserver {
        pilot: None,
        cleared: 0,
        retries: 0,
        done,
    });
    let pilot = DemoPilot::new(0x5eed, engine.thrust_queue());
    engine.observer_mut().pilot = Some(pilot);

    let driver = IntervalDriver::spawn(engine, settings.tick_interval());
    driver.start_attempt(settings.difficulty, 1);

    // Generous upper bound: the tallest demo level lands well within this many ticks
    let budget = settings.tick_interval() * 1000 + Duration::from_secs(1);
    match finished.recv_timeout(budget) {
        Ok(cleared) => println!("\nDesistes?! Cleared {} level(s).", cleared),
        Err(_) => log::warn!("Demo did not finish in time"),
    }

    driver.stop_attempt();
    if let Some(engine) = driver.shutdown() {
        log::info!("Final level: {}", engine.describe_level());
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No web front end; the engine is used as a library there
}
