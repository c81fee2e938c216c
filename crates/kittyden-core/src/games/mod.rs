//! Mini-games: the bank heist, kicking the hooman, and the party deck.

pub mod heist;
pub mod kick;
pub mod nhie;

pub use heist::{BankJob, HeistReport, HeistTeam};
pub use kick::{kick_hooman, KickOutcome};
pub use nhie::NhieGame;
