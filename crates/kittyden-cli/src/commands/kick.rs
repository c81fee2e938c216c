use clap::Subcommand;
use kittyden_core::currency::{CoinBank, CoinPolicy};
use kittyden_core::games::kick::kick_hooman;
use kittyden_core::progression::{Collection, ProgressionStore};
use kittyden_core::storage::{Config, Database, ReadCache};

use crate::common::resolve_user;

#[derive(Subcommand)]
pub enum KickAction {
    /// Send a kitty to kick the hooman (50/50)
    Run {
        /// Kitty doing the kicking; defaults to the equipped one
        #[arg(long)]
        kitty: Option<String>,
        #[arg(long)]
        user: Option<String>,
    },
}

pub fn run(action: KickAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();

    match action {
        KickAction::Run { kitty, user } => {
            let user = resolve_user(user, &db);
            let collection = Collection::new(&db);
            let kitty = kitty.unwrap_or_else(|| collection.equipped(&user));
            if !collection.is_unlocked(&kitty) {
                return Err(format!("kitty '{kitty}' is not unlocked").into());
            }

            let mut cache = ReadCache::new();
            let mut bank = CoinBank::new(&db, &mut cache, CoinPolicy::from_config(&config));
            let progression = ProgressionStore::new(&db);
            let mut rng = rand::thread_rng();

            let outcome = kick_hooman(&mut bank, &progression, &user, &kitty, &mut rng);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }
    Ok(())
}
