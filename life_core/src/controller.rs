// controller.rs - Applies input actions and paces generations
//
// One frame = drain every pending input event, then advance at most one
// generation if running and the step delay has passed.

use std::time::{Duration, Instant};

use crate::input::{Action, InputEvent, map_event_to_action};
use crate::patterns::Pattern;
use crate::sim::Simulation;

/// Applies one action to the simulation. Returns whether a redraw is needed.
pub fn apply_action(sim: &mut Simulation, action: Action) -> bool {
    match action {
        Action::ModifierDown       => sim.set_modifier(true),
        Action::ModifierUp         => sim.set_modifier(false),
        Action::TogglePause        => sim.toggle_pause(),
        Action::Randomize          => sim.randomize(),
        Action::MoveCursor(dir)    => sim.move_cursor(dir),
        Action::ToggleCell         => sim.toggle_at_cursor(),
        Action::Clear              => sim.clear(),
        Action::Step               => sim.step(),
        Action::StampPattern       => sim.apply_pattern(Pattern::VerticalLine),
    }
    action.redraws()
}

/// What happened during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Number of input events that mapped to an action.
    pub handled: usize,
    /// A generation was computed by the run timer.
    pub stepped: bool,
    pub redraw: bool,
}

/// Drives the simulation from input events and wall-clock time.
#[derive(Debug, Clone)]
pub struct Controller {
    step_delay : Duration,
    last_step  : Option<Instant>,
}

impl Controller {
    pub fn new(step_delay: Duration) -> Self {
        Self {
            step_delay,
            last_step: None,
        }
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    pub fn handle_event(&mut self, sim: &mut Simulation, event: InputEvent) -> Option<bool> {
        let action = map_event_to_action(event)?;
        let was_paused = sim.is_paused();
        let redraw = apply_action(sim, action);
        if was_paused && sim.is_running() {
            // Resume without waiting out a delay that belongs to the last run.
            self.last_step = None;
        }
        Some(redraw)
    }

    /// Runs one frame at time `now`.
    pub fn frame<I>(&mut self, sim: &mut Simulation, events: I, now: Instant) -> FrameOutcome
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut outcome = FrameOutcome::default();
        for event in events {
            if let Some(redraw) = self.handle_event(sim, event) {
                outcome.handled += 1;
                outcome.redraw |= redraw;
            }
        }

        if sim.is_running() && self.is_due(now) {
            sim.step();
            self.last_step = Some(now);
            outcome.stepped = true;
            outcome.redraw = true;
        }
        outcome
    }

    fn is_due(&self, now: Instant) -> bool {
        self.last_step
            .is_none_or(|last| now.saturating_duration_since(last) >= self.step_delay)
    }

    /// Time left before the next generation, or `None` while paused.
    pub fn until_next_step(&self, sim: &Simulation, now: Instant) -> Option<Duration> {
        if sim.is_paused() {
            return None;
        }
        Some(match self.last_step {
            Some(last) => self.step_delay.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        })
    }
}
