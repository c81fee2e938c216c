//! Daily feeding and the feeding streak.
//!
//! Feeding works on calendar days, not 24-hour windows: once per day,
//! fed-yesterday extends the streak, a missed day resets it to 1.
//! Each feeding pays a small coin reward and starts the eating phase.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::currency::CoinBank;
use crate::error::{CoreError, ValidationError};
use crate::pet::state::PetStateMachine;
use crate::storage::Database;

const STREAK_KEY: &str = "feedingStreak";
const LAST_FED_KEY: &str = "lastFedDate";

/// Coins earned per feeding.
pub const FEED_REWARD: u64 = 5;

/// Persisted feeding state for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedingRecord {
    pub streak: u32,
    pub last_fed: Option<NaiveDate>,
}

/// Whether the pet can be fed today (once per calendar day).
pub fn can_feed(record: &FeedingRecord, today: NaiveDate) -> bool {
    record.last_fed != Some(today)
}

/// Streak value a feeding on `today` would produce.
pub fn next_streak(record: &FeedingRecord, today: NaiveDate) -> u32 {
    match record.last_fed {
        Some(last) if last == today - Duration::days(1) => record.streak + 1,
        _ => 1,
    }
}

/// Result of a successful feeding.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeedOutcome {
    pub streak: u32,
    pub coins_earned: u64,
    pub new_balance: u64,
}

/// Feeding operations over the kv store.
pub struct FeedingStore<'a> {
    db: &'a Database,
}

impl<'a> FeedingStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn streak_key(user: &str) -> String {
        format!("{STREAK_KEY}_{user}")
    }

    fn last_fed_key(user: &str) -> String {
        format!("{LAST_FED_KEY}_{user}")
    }

    /// Load a user's feeding record, defaulting to no-streak.
    pub fn load(&self, user: &str) -> FeedingRecord {
        let streak = match self.db.kv_get(&Self::streak_key(user)) {
            Ok(Some(raw)) => raw.parse().unwrap_or(0),
            Ok(None) => 0,
            Err(e) => {
                tracing::warn!(user, "failed to load feeding streak: {e}");
                0
            }
        };
        let last_fed = match self.db.kv_get(&Self::last_fed_key(user)) {
            Ok(Some(raw)) => raw.parse().ok(),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(user, "failed to load last-fed date: {e}");
                None
            }
        };
        FeedingRecord { streak, last_fed }
    }

    fn save(&self, user: &str, record: &FeedingRecord) {
        if let Err(e) = self
            .db
            .kv_set(&Self::streak_key(user), &record.streak.to_string())
        {
            tracing::warn!(user, "failed to save feeding streak: {e}");
        }
        if let Some(date) = record.last_fed {
            if let Err(e) = self.db.kv_set(&Self::last_fed_key(user), &date.to_string()) {
                tracing::warn!(user, "failed to save last-fed date: {e}");
            }
        }
    }

    /// Feed the pet: update the streak, pay the reward, start eating.
    ///
    /// # Errors
    /// Returns an error if the pet was already fed today.
    pub fn feed(
        &self,
        bank: &mut CoinBank<'_>,
        pet: &mut PetStateMachine,
        user: &str,
        now: DateTime<Utc>,
        eating_duration: Duration,
    ) -> Result<FeedOutcome, CoreError> {
        let today = now.date_naive();
        let record = self.load(user);
        if !can_feed(&record, today) {
            return Err(ValidationError::AlreadyFed(today).into());
        }

        let streak = next_streak(&record, today);
        self.save(
            user,
            &FeedingRecord {
                streak,
                last_fed: Some(today),
            },
        );

        let new_balance = bank.reward(user, FEED_REWARD);
        pet.start_eating(now, eating_duration);

        Ok(FeedOutcome {
            streak,
            coins_earned: FEED_REWARD,
            new_balance,
        })
    }

    /// Forget the last feeding so the pet can be fed again (debug aid).
    pub fn reset(&self, user: &str) {
        if let Err(e) = self.db.kv_delete(&Self::last_fed_key(user)) {
            tracing::warn!(user, "failed to reset last-fed date: {e}");
        }
    }
}
