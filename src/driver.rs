//! Threaded tick source
//!
//! Runs a [`LevelEngine`] on a worker thread and feeds it one tick per
//! interval. Start/stop/query commands and ticks are serialized through the
//! same thread, so switching attempts can never interleave with a tick.
//! Thrust requests bypass the channel and go straight to the shared
//! [`ThrustQueue`].

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use serde::{Deserialize, Serialize};

use crate::engine::{LevelEngine, LevelObserver};
use crate::sim::{Difficulty, EnginePhase, Telemetry, ThrustQueue, TickOutcome};

/// Engine status as seen from outside the worker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: EnginePhase,
    pub difficulty: Difficulty,
    pub level: u32,
    pub title: String,
    pub telemetry: Telemetry,
    pub pending_thrusts: u32,
    pub ticks: u64,
}

impl Snapshot {
    fn of<O: LevelObserver>(engine: &LevelEngine<O>) -> Self {
        Self {
            phase: engine.phase(),
            difficulty: engine.difficulty(),
            level: engine.level(),
            title: engine.describe_level(),
            telemetry: engine.telemetry(),
            pending_thrusts: engine.pending_thrusts(),
            ticks: engine.ticks(),
        }
    }
}

enum Command {
    Start { difficulty: Difficulty, level: u32 },
    Prepare(Difficulty),
    Resume,
    Stop,
    Snapshot(Sender<Snapshot>),
    Shutdown,
}

/// Periodic driver for a level engine
pub struct IntervalDriver<O> {
    commands: Sender<Command>,
    thrusts: ThrustQueue,
    worker: Option<JoinHandle<LevelEngine<O>>>,
}

impl<O: LevelObserver + Send + 'static> IntervalDriver<O> {
    /// Move `engine` onto a worker thread ticking every `interval`
    pub fn spawn(engine: LevelEngine<O>, interval: Duration) -> Self {
        let (commands, receiver) = crossbeam_channel::unbounded();
        let thrusts = engine.thrust_queue();
        let worker = thread::spawn(move || run(engine, receiver, interval));
        log::info!("Tick driver started ({} ms interval)", interval.as_millis());

        Self {
            commands,
            thrusts,
            worker: Some(worker),
        }
    }

    pub fn start_attempt(&self, difficulty: Difficulty, level: u32) {
        self.send(Command::Start { difficulty, level });
    }

    pub fn prepare(&self, difficulty: Difficulty) {
        self.send(Command::Prepare(difficulty));
    }

    pub fn resume(&self) {
        self.send(Command::Resume);
    }

    pub fn stop_attempt(&self) {
        self.send(Command::Stop);
    }

    pub fn request_thrust(&self) {
        self.thrusts.request();
    }

    pub fn thrust_queue(&self) -> ThrustQueue {
        self.thrusts.clone()
    }

    /// Current engine status; None once the worker is gone
    pub fn snapshot(&self) -> Option<Snapshot> {
        let (reply, response) = crossbeam_channel::bounded(1);
        self.commands.send(Command::Snapshot(reply)).ok()?;
        response.recv().ok()
    }

    /// Stop the worker and take the engine back
    pub fn shutdown(mut self) -> Option<LevelEngine<O>> {
        let worker = self.worker.take()?;
        let _ = self.commands.send(Command::Shutdown);
        match worker.join() {
            Ok(engine) => Some(engine),
            Err(_) => {
                log::error!("Tick worker panicked");
                None
            }
        }
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            log::warn!("Tick worker has exited, command dropped");
        }
    }
}

impl<O> Drop for IntervalDriver<O> {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = self.commands.send(Command::Shutdown);
            let _ = worker.join();
        }
    }
}

fn run<O: LevelObserver>(
    mut engine: LevelEngine<O>,
    commands: Receiver<Command>,
    interval: Duration,
) -> LevelEngine<O> {
    let mut next_tick = Instant::now() + interval;

    loop {
        // Idle engines have nothing to time, so just wait for a command
        let message = if engine.is_running() {
            commands.recv_deadline(next_tick)
        } else {
            commands.recv().map_err(|_| RecvTimeoutError::Disconnected)
        };

        match message {
            Ok(Command::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Ok(Command::Snapshot(reply)) => {
                let _ = reply.send(Snapshot::of(&engine));
            }
            // A fresh run gets a full interval before its first tick
            Ok(Command::Start { difficulty, level }) => {
                engine.start_attempt(difficulty, level);
                next_tick = Instant::now() + interval;
            }
            Ok(Command::Resume) => {
                if !engine.is_running() {
                    engine.resume();
                    next_tick = Instant::now() + interval;
                }
            }
            Ok(Command::Prepare(difficulty)) => engine.prepare(difficulty),
            Ok(Command::Stop) => engine.stop_attempt(),
            Err(RecvTimeoutError::Timeout) => {
                let result = engine.step();
                next_tick = next_deadline(next_tick, interval, result, Instant::now());
            }
        }
    }

    log::info!("Tick driver stopped at {}", engine.describe_level());
    engine
}

/// Deadline for the tick after one that just ran
///
/// Keeps a fixed cadence, but never schedules in the past: a touchdown (whose
/// decision may have blocked and started a new attempt) or an overrun restarts
/// the clock from `now` instead of replaying missed ticks.
fn next_deadline(
    previous: Instant,
    interval: Duration,
    result: Option<TickOutcome>,
    now: Instant,
) -> Instant {
    let scheduled = previous + interval;
    if matches!(result, Some(TickOutcome::Touchdown(_))) || scheduled < now {
        now + interval
    } else {
        scheduled
    }
}
