//! Level engine: owns the live attempt and runs the end-of-level flow
//!
//! The engine knows nothing about rendering. Everything a front end needs
//! arrives through [`LevelObserver`]; thrust comes in through
//! [`ThrustQueue`] handles that may live on other threads.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_LEVEL;
use crate::sim::{
    CelestialBody, Decision, Difficulty, EnginePhase, LevelOutcome, LevelParams, LevelReport,
    LevelState, Telemetry, ThrustQueue, TickOutcome, Vehicle, tick,
};

/// Details of a freshly installed attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptInfo {
    pub difficulty: Difficulty,
    pub level: u32,
    pub body_name: String,
    pub title: String,
    pub telemetry: Telemetry,
}

/// Front-end callbacks
pub trait LevelObserver {
    /// Called at the start of every tick and once more at touchdown
    fn on_tick(&mut self, telemetry: &Telemetry);

    /// Called once per attempt at touchdown; must pick one of `report.choices()`
    fn on_level_end(&mut self, report: &LevelReport) -> Decision;

    /// Called whenever a new attempt's parameters are installed
    fn on_attempt_started(&mut self, _attempt: &AttemptInfo) {}
}

/// The level state machine
pub struct LevelEngine<O> {
    state: LevelState,
    phase: EnginePhase,
    thrusts: ThrustQueue,
    observer: O,
}

impl<O: LevelObserver> LevelEngine<O> {
    /// Engine staged on the Easy opening level, idle
    pub fn new(observer: O) -> Self {
        let difficulty = Difficulty::default();
        Self {
            state: LevelState::new(difficulty, &LevelParams::opening(difficulty)),
            phase: EnginePhase::Idle,
            thrusts: ThrustQueue::new(),
            observer,
        }
    }

    /// Stage the opening level of a new game without starting the clock
    pub fn prepare(&mut self, difficulty: Difficulty) {
        self.install(difficulty, LevelParams::opening(difficulty));
    }

    /// Set up `level` at `difficulty` and start ticking
    ///
    /// Level 1 plays the tier's opening level; any running attempt is
    /// stopped before its state is replaced. `level` is clamped to
    /// `1..=MAX_LEVEL`.
    pub fn start_attempt(&mut self, difficulty: Difficulty, level: u32) {
        let level = level.clamp(1, MAX_LEVEL);
        let params = if level == 1 {
            LevelParams::opening(difficulty)
        } else {
            LevelParams::generate(difficulty, level)
        };
        self.install(difficulty, params);
        self.phase = EnginePhase::Running;
    }

    /// Start ticking the staged attempt as-is
    pub fn resume(&mut self) {
        if self.phase == EnginePhase::Idle {
            log::info!("Resuming {}", self.state.title());
            self.phase = EnginePhase::Running;
        }
    }

    pub fn stop_attempt(&mut self) {
        if self.phase == EnginePhase::Running {
            log::info!("Stopping {}", self.state.title());
        }
        self.phase = EnginePhase::Idle;
    }

    /// Queue one thrust unit (also accepted while idle)
    pub fn request_thrust(&self) {
        self.thrusts.request();
    }

    /// Handle for input code running elsewhere
    pub fn thrust_queue(&self) -> ThrustQueue {
        self.thrusts.clone()
    }

    /// Deliver one tick; `None` while idle
    pub fn step(&mut self) -> Option<TickOutcome> {
        if self.phase != EnginePhase::Running {
            return None;
        }

        self.observer.on_tick(&self.state.telemetry());
        let result = tick(&mut self.state, &self.thrusts);

        if let TickOutcome::Touchdown(outcome) = result {
            self.phase = EnginePhase::Idle;
            self.observer.on_tick(&self.state.telemetry());
            self.end_of_level(outcome);
        }

        Some(result)
    }

    pub fn describe_level(&self) -> String {
        self.state.title()
    }

    #[inline]
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == EnginePhase::Running
    }

    pub fn telemetry(&self) -> Telemetry {
        self.state.telemetry()
    }

    pub fn state(&self) -> &LevelState {
        &self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn max_safe_speed(&self) -> i32 {
        self.state.max_safe_speed
    }

    pub fn body(&self) -> &CelestialBody {
        &self.state.body
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.state.vehicle
    }

    pub fn pending_thrusts(&self) -> u32 {
        self.thrusts.pending()
    }

    pub fn ticks(&self) -> u64 {
        self.state.ticks
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Replace the live attempt (always leaves the engine idle)
    fn install(&mut self, difficulty: Difficulty, params: LevelParams) {
        self.phase = EnginePhase::Idle;
        self.state = LevelState::new(difficulty, &params);
        self.thrusts.clear();

        log::info!(
            "Attempt ready: {}alt={} g={} fuel={} limit={}",
            self.state.title(),
            self.state.altitude,
            self.state.body.gravity(),
            self.state.vehicle.fuel(),
            self.state.max_safe_speed
        );

        let info = AttemptInfo {
            difficulty,
            level: self.state.level,
            body_name: self.state.body.name().to_string(),
            title: self.state.title(),
            telemetry: self.state.telemetry(),
        };
        self.observer.on_attempt_started(&info);
    }

    fn end_of_level(&mut self, outcome: LevelOutcome) {
        let level = self.state.level;
        let report = LevelReport {
            outcome,
            level,
            touchdown_speed: self.state.current_speed,
            max_safe_speed: self.state.max_safe_speed,
            title: self.state.title(),
            message: outcome.message(level),
        };

        let mut decision = self.observer.on_level_end(&report);
        if !outcome.offers(decision) {
            log::warn!(
                "{:?} is not offered after {:?}, using {:?}",
                decision,
                outcome,
                outcome.default_choice()
            );
            decision = outcome.default_choice();
        }
        log::info!("Level {} {:?}: player chose {}", level, outcome, decision.as_str());

        match decision.next_level(level) {
            Some(next) => {
                let difficulty = self.state.difficulty;
                self.install(difficulty, LevelParams::generate(difficulty, next));
                self.phase = EnginePhase::Running;
            }
            None => log::info!("Level {} left idle", level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Observer that records everything and answers from a script
    #[derive(Default)]
    struct Recorder {
        ticks: Vec<Telemetry>,
        reports: Vec<LevelReport>,
        attempts: Vec<AttemptInfo>,
        answers: Vec<Decision>,
    }

    impl Recorder {
        fn answering(answers: &[Decision]) -> Self {
            Self {
                answers: answers.iter().rev().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl LevelObserver for Recorder {
        fn on_tick(&mut self, telemetry: &Telemetry) {
            self.ticks.push(*telemetry);
        }

        fn on_level_end(&mut self, report: &LevelReport) -> Decision {
            self.reports.push(report.clone());
            self.answers.pop().unwrap_or(Decision::Cancel)
        }

        fn on_attempt_started(&mut self, attempt: &AttemptInfo) {
            self.attempts.push(attempt.clone());
        }
    }

    fn run_to_touchdown<O: LevelObserver>(engine: &mut LevelEngine<O>) -> LevelOutcome {
        for _ in 0..10_000 {
            if let Some(TickOutcome::Touchdown(outcome)) = engine.step() {
                return outcome;
            }
        }
        panic!("no touchdown");
    }

    #[test]
    fn test_new_engine_is_idle_on_easy_opening() {
        let mut engine = LevelEngine::new(Recorder::default());
        assert_eq!(engine.phase(), EnginePhase::Idle);
        assert_eq!(engine.describe_level(), "Easy - nível 1 - Lua: ");
        assert_eq!(engine.step(), None);
        assert!(engine.observer().ticks.is_empty());
    }

    #[test]
    fn test_start_attempt_installs_parameters() {
        let mut engine = LevelEngine::new(Recorder::default());
        engine.start_attempt(Difficulty::Hard, 2);
        assert!(engine.is_running());
        assert_eq!(engine.level(), 2);
        assert_eq!(engine.max_safe_speed(), 55);
        assert_eq!(engine.telemetry().altitude, 500);
        assert_eq!(engine.body().gravity(), 7);
        assert_eq!(engine.vehicle().thrust_accel(), 11);
        assert_eq!(engine.describe_level(), "Hard - nível 2 - Terra: ");
        assert_eq!(engine.observer().attempts.len(), 1);
    }

    #[test]
    fn test_start_attempt_level_one_uses_opening() {
        let mut engine = LevelEngine::new(Recorder::default());
        engine.start_attempt(Difficulty::Easy, 1);
        assert_eq!(engine.telemetry().altitude, 100);
        assert_eq!(engine.vehicle().fuel(), 51);

        engine.start_attempt(Difficulty::Easy, 0);
        assert_eq!(engine.level(), 1);
        assert_eq!(engine.telemetry().altitude, 100);
    }

    #[test]
    fn test_start_attempt_caps_huge_levels() {
        let mut engine = LevelEngine::new(Recorder::answering(&[Decision::RetryLevel]));
        engine.start_attempt(Difficulty::Hard, 30_000_000);
        assert_eq!(engine.level(), MAX_LEVEL);
        assert_eq!(
            engine.state(),
            &LevelState::new(
                Difficulty::Hard,
                &LevelParams::generate(Difficulty::Hard, MAX_LEVEL)
            )
        );

        assert_eq!(run_to_touchdown(&mut engine), LevelOutcome::Failure);
        assert!(engine.is_running());
        assert_eq!(engine.level(), MAX_LEVEL);

        engine.start_attempt(Difficulty::VeryHard, u32::MAX);
        assert_eq!(engine.level(), MAX_LEVEL);
    }

    #[test]
    fn test_tick_reports_before_integrating() {
        let mut engine = LevelEngine::new(Recorder::default());
        engine.start_attempt(Difficulty::Easy, 1);
        engine.step();
        engine.step();
        let ticks = &engine.observer().ticks;
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[0].altitude, 100);
        assert_eq!(ticks[0].speed, 0);
        assert_eq!(ticks[1].altitude, 95);
        assert_eq!(ticks[1].speed, -5);
    }

    #[test]
    fn test_touchdown_reports_twice_and_goes_idle_on_cancel() {
        let mut engine = LevelEngine::new(Recorder::answering(&[Decision::Cancel]));
        engine.start_attempt(Difficulty::Easy, 1);
        let outcome = run_to_touchdown(&mut engine);
        assert_eq!(outcome, LevelOutcome::Success);
        assert!(!engine.is_running());

        let recorder = engine.observer();
        // Seven pre-step reports plus the touchdown report
        assert_eq!(recorder.ticks.len(), 8);
        let last = recorder.ticks.last().unwrap();
        assert_eq!(last.altitude, 0);
        assert_eq!(last.progress, 1.0);
        assert_eq!(last.speed, -35);

        assert_eq!(recorder.reports.len(), 1);
        let report = &recorder.reports[0];
        assert!(report.success());
        assert_eq!(report.default_choice(), Decision::NextLevel);
        assert_eq!(report.message, "Parabéns! Completaste o Nível 1!");

        // Cancel changes nothing
        assert_eq!(engine.level(), 1);
        assert_eq!(engine.telemetry().altitude, 0);
        assert_eq!(engine.step(), None);
    }

    #[test]
    fn test_next_level_generates_and_runs() {
        let mut engine = LevelEngine::new(Recorder::answering(&[Decision::NextLevel]));
        engine.start_attempt(Difficulty::Easy, 1);
        run_to_touchdown(&mut engine);

        assert!(engine.is_running());
        assert_eq!(engine.level(), 2);
        assert_eq!(engine.state(), &LevelState::new(
            Difficulty::Easy,
            &LevelParams::generate(Difficulty::Easy, 2)
        ));
        assert_eq!(engine.describe_level(), "Easy - nível 2 - Terra: ");
    }

    #[test]
    fn test_restart_from_beginning_uses_formula() {
        let mut engine = LevelEngine::new(Recorder::answering(&[Decision::RestartFromBeginning]));
        engine.start_attempt(Difficulty::Medium, 3);
        run_to_touchdown(&mut engine);

        assert!(engine.is_running());
        assert_eq!(engine.level(), 1);
        assert_eq!(engine.difficulty(), Difficulty::Medium);
        assert_eq!(
            engine.telemetry().altitude,
            LevelParams::generate(Difficulty::Medium, 1).initial_altitude
        );
    }

    #[test]
    fn test_failure_retry_keeps_level() {
        let mut engine = LevelEngine::new(Recorder::answering(&[Decision::RetryLevel]));
        engine.start_attempt(Difficulty::Hard, 2);
        assert_eq!(run_to_touchdown(&mut engine), LevelOutcome::Failure);

        let report = &engine.observer().reports[0];
        assert!(!report.success());
        assert_eq!(report.touchdown_speed, -91);
        assert_eq!(report.choices().len(), 3);
        assert_eq!(report.message, "Game Over! Perdeu o Nível 2!");

        assert!(engine.is_running());
        assert_eq!(engine.level(), 2);
        assert_eq!(engine.telemetry().altitude, 500);
        assert_eq!(engine.ticks(), 0);
    }

    #[test]
    fn test_next_level_after_failure_falls_back_to_retry() {
        let mut engine = LevelEngine::new(Recorder::answering(&[Decision::NextLevel]));
        engine.start_attempt(Difficulty::Hard, 2);
        run_to_touchdown(&mut engine);
        assert!(engine.is_running());
        assert_eq!(engine.level(), 2);
    }

    #[test]
    fn test_new_attempt_clears_pending_thrusts() {
        let mut engine = LevelEngine::new(Recorder::default());
        engine.request_thrust();
        engine.request_thrust();
        engine.start_attempt(Difficulty::Medium, 1);
        assert_eq!(engine.pending_thrusts(), 0);
    }

    #[test]
    fn test_thrust_queued_while_idle_carries_into_resume() {
        let mut engine = LevelEngine::new(Recorder::default());
        engine.prepare(Difficulty::Easy);
        let input = engine.thrust_queue();
        input.request();
        assert_eq!(engine.step(), None);
        assert_eq!(engine.pending_thrusts(), 1);

        engine.resume();
        engine.step();
        assert_eq!(engine.pending_thrusts(), 0);
        assert_eq!(engine.telemetry().speed, 3);
    }

    #[test]
    fn test_stop_is_idempotent_and_freezes_state() {
        let mut engine = LevelEngine::new(Recorder::default());
        engine.start_attempt(Difficulty::VeryHard, 1);
        engine.step();
        let frozen = engine.telemetry();
        engine.stop_attempt();
        engine.stop_attempt();
        assert_eq!(engine.step(), None);
        assert_eq!(engine.telemetry(), frozen);
    }

    #[test]
    fn test_prepare_stops_running_attempt() {
        let mut engine = LevelEngine::new(Recorder::default());
        engine.start_attempt(Difficulty::Hard, 4);
        engine.step();
        engine.prepare(Difficulty::Medium);
        assert!(!engine.is_running());
        assert_eq!(engine.level(), 1);
        assert_eq!(engine.describe_level(), "Medium - nível 1 - Lua: ");
        assert_eq!(engine.ticks(), 0);
    }

    #[test]
    fn test_thrust_can_save_a_hard_landing() {
        // Hard level 2 crashes in free fall; steady thrust lands it
        struct Pilot(ThrustQueue, Option<LevelReport>);
        impl LevelObserver for Pilot {
            fn on_tick(&mut self, telemetry: &Telemetry) {
                if telemetry.speed < -20 && self.0.pending() == 0 {
                    self.0.request();
                }
            }
            fn on_level_end(&mut self, report: &LevelReport) -> Decision {
                self.1 = Some(report.clone());
                Decision::Cancel
            }
        }

        let mut engine = LevelEngine::new(Pilot(ThrustQueue::new(), None));
        let queue = engine.thrust_queue();
        engine.observer_mut().0 = queue;
        engine.start_attempt(Difficulty::Hard, 2);
        assert_eq!(run_to_touchdown(&mut engine), LevelOutcome::Success);
        let report = engine.into_observer().1.unwrap();
        assert!(-report.touchdown_speed <= report.max_safe_speed);
    }
}
