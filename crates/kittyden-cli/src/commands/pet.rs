use chrono::{Duration, Utc};
use clap::Subcommand;
use kittyden_core::currency::{CoinBank, CoinPolicy};
use kittyden_core::pet::{FeedingStore, PetStateMachine};
use kittyden_core::storage::{Config, Database, ReadCache};

use crate::common::resolve_user;

const PET_STATE_KEY: &str = "petState";

#[derive(Subcommand)]
pub enum PetAction {
    /// Feed the pet (once per calendar day)
    Feed {
        #[arg(long)]
        user: Option<String>,
    },
    /// Show the pet's phase and feeding streak
    Status {
        #[arg(long)]
        user: Option<String>,
    },
    /// Forget today's feeding so the pet can be fed again
    Reset {
        #[arg(long)]
        user: Option<String>,
    },
}

fn state_key(user: &str) -> String {
    format!("{PET_STATE_KEY}_{user}")
}

fn load_pet(db: &Database, user: &str) -> PetStateMachine {
    if let Ok(Some(json)) = db.kv_get(&state_key(user)) {
        if let Ok(pet) = serde_json::from_str::<PetStateMachine>(&json) {
            return pet;
        }
    }
    PetStateMachine::new()
}

fn save_pet(
    db: &Database,
    user: &str,
    pet: &PetStateMachine,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(pet)?;
    db.kv_set(&state_key(user), &json)?;
    Ok(())
}

pub fn run(action: PetAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();
    let now = Utc::now();

    match action {
        PetAction::Feed { user } => {
            let user = resolve_user(user, &db);
            let mut cache = ReadCache::new();
            let mut bank = CoinBank::new(&db, &mut cache, CoinPolicy::from_config(&config));
            let mut pet = load_pet(&db, &user);
            pet.tick(now);

            let store = FeedingStore::new(&db);
            let outcome = store.feed(
                &mut bank,
                &mut pet,
                &user,
                now,
                Duration::seconds(config.pet.eating_seconds as i64),
            )?;
            save_pet(&db, &user, &pet)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        PetAction::Status { user } => {
            let user = resolve_user(user, &db);
            let mut pet = load_pet(&db, &user);
            let transition = pet.tick(now);
            save_pet(&db, &user, &pet)?;

            let store = FeedingStore::new(&db);
            let record = store.load(&user);
            let out = serde_json::json!({
                "phase": pet.phase(),
                "transition": transition,
                "streak": record.streak,
                "last_fed": record.last_fed,
                "can_feed": kittyden_core::pet::feeding::can_feed(&record, now.date_naive()),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        PetAction::Reset { user } => {
            let user = resolve_user(user, &db);
            FeedingStore::new(&db).reset(&user);
            let pet = PetStateMachine::new();
            save_pet(&db, &user, &pet)?;
            println!("ok");
        }
    }
    Ok(())
}
