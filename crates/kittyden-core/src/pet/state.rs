//! Pet phase state machine.
//!
//! A wall-clock state machine in the same mold as a cooperative timer
//! engine: it holds deadlines, not threads, and the caller invokes
//! `tick()` to advance it. Dropping the machine cancels everything
//! pending, and a tick against state that has already moved on is a
//! no-op.
//!
//! ## Phase transitions
//!
//! ```text
//! Awake -(feed)-> Eating -(deadline)-> Sleeping -(next day)-> Awake
//! ```

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// What the pet is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetPhase {
    Awake,
    Eating,
    Sleeping,
}

/// A completed phase transition, reported by [`PetStateMachine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PetTransition {
    pub from: PetPhase,
    pub to: PetPhase,
}

/// Wall-clock pet state machine.
///
/// Serializable so a host can persist it between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetStateMachine {
    phase: PetPhase,
    /// Deadline of the eating phase (only meaningful while Eating).
    #[serde(default)]
    eating_until: Option<DateTime<Utc>>,
    /// Calendar day the current nap started (only meaningful while Sleeping).
    #[serde(default)]
    sleeping_since: Option<NaiveDate>,
}

impl Default for PetStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PetStateMachine {
    /// A freshly created pet is awake.
    pub fn new() -> Self {
        Self {
            phase: PetPhase::Awake,
            eating_until: None,
            sleeping_since: None,
        }
    }

    pub fn phase(&self) -> PetPhase {
        self.phase
    }

    /// Begin the eating phase. The pet will fall asleep once `duration`
    /// has elapsed, on the next tick that observes it.
    pub fn start_eating(&mut self, now: DateTime<Utc>, duration: Duration) {
        self.phase = PetPhase::Eating;
        self.eating_until = Some(now + duration);
        self.sleeping_since = None;
    }

    /// Advance the machine against the wall clock.
    ///
    /// Returns the transition that fired, if any. Ticking a phase whose
    /// deadline has not arrived -- or state another caller already moved
    /// past -- does nothing.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<PetTransition> {
        match self.phase {
            PetPhase::Awake => None,
            PetPhase::Eating => {
                let Some(deadline) = self.eating_until else {
                    // Eating without a deadline is stale state; recover
                    self.phase = PetPhase::Awake;
                    return Some(PetTransition {
                        from: PetPhase::Eating,
                        to: PetPhase::Awake,
                    });
                };
                if now < deadline {
                    return None;
                }
                self.phase = PetPhase::Sleeping;
                self.eating_until = None;
                self.sleeping_since = Some(now.date_naive());
                Some(PetTransition {
                    from: PetPhase::Eating,
                    to: PetPhase::Sleeping,
                })
            }
            PetPhase::Sleeping => {
                let since = self.sleeping_since.unwrap_or_else(|| now.date_naive());
                if now.date_naive() <= since {
                    return None;
                }
                self.phase = PetPhase::Awake;
                self.sleeping_since = None;
                Some(PetTransition {
                    from: PetPhase::Sleeping,
                    to: PetPhase::Awake,
                })
            }
        }
    }
}
