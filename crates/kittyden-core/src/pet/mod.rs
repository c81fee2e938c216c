//! Pet care: the awake/eating/sleeping cycle and the daily feeding streak.

pub mod feeding;
pub mod state;

pub use feeding::{FeedOutcome, FeedingRecord, FeedingStore};
pub use state::{PetPhase, PetStateMachine, PetTransition};
