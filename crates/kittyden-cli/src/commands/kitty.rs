use clap::Subcommand;
use kittyden_core::currency::{CoinBank, CoinPolicy};
use kittyden_core::gacha::roll_for_kitty;
use kittyden_core::kitty::catalog;
use kittyden_core::progression::{Collection, ProgressKey, ProgressionStore};
use kittyden_core::storage::{Config, Database, ReadCache};
use serde::Serialize;

use crate::common::resolve_user;

#[derive(Subcommand)]
pub enum KittyAction {
    /// Spend coins and roll for a kitty
    Draw {
        /// Act as this user instead of the active one
        #[arg(long)]
        user: Option<String>,
    },
    /// Show the unlocked collection, rarest first
    Gallery {
        #[arg(long)]
        user: Option<String>,
    },
    /// Equip a kitty
    Equip {
        /// Kitty id (e.g. "galactic")
        kitty: String,
        #[arg(long)]
        user: Option<String>,
    },
    /// Show one kitty's progression record and derived stats
    Stats {
        /// Kitty id
        kitty: String,
        #[arg(long)]
        user: Option<String>,
    },
}

#[derive(Serialize)]
struct GalleryEntry {
    id: String,
    name: String,
    rarity: &'static str,
    color: &'static str,
    level: u32,
    equipped: bool,
}

pub fn run(action: KittyAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();

    match action {
        KittyAction::Draw { user } => {
            let user = resolve_user(user, &db);
            let mut cache = ReadCache::new();
            let mut bank = CoinBank::new(&db, &mut cache, CoinPolicy::from_config(&config));
            let collection = Collection::new(&db);
            let progression = ProgressionStore::new(&db);
            let mut rng = rand::thread_rng();

            let outcome = roll_for_kitty(
                &mut bank,
                &collection,
                &progression,
                &user,
                config.gacha.draw_cost,
                &mut rng,
            );
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        KittyAction::Gallery { user } => {
            let user = resolve_user(user, &db);
            let collection = Collection::new(&db);
            let progression = ProgressionStore::new(&db);
            let equipped = collection.equipped(&user);

            let mut entries: Vec<GalleryEntry> = collection
                .unlocked()
                .into_iter()
                .map(|id| {
                    let rarity = kittyden_core::rarity_of(&id);
                    let level = progression.level(&ProgressKey::new(&user, &id));
                    GalleryEntry {
                        name: catalog::display_name(&id).to_string(),
                        rarity: rarity.name(),
                        color: rarity.color(),
                        level,
                        equipped: id == equipped,
                        id,
                    }
                })
                .collect();
            // Rarest first, then by id
            entries.sort_by(|a, b| {
                kittyden_core::rarity_of(&b.id)
                    .cmp(&kittyden_core::rarity_of(&a.id))
                    .then_with(|| a.id.cmp(&b.id))
            });
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        KittyAction::Equip { kitty, user } => {
            let user = resolve_user(user, &db);
            let collection = Collection::new(&db);
            collection.equip(&user, &kitty)?;
            println!("equipped {kitty}");
        }
        KittyAction::Stats { kitty, user } => {
            let user = resolve_user(user, &db);
            let progression = ProgressionStore::new(&db);
            let key = ProgressKey::new(&user, &kitty);
            let record = progression.record(&key);
            let stats = progression.derived_stats(&key);
            let rarity = kittyden_core::rarity_of(&kitty);

            let out = serde_json::json!({
                "kitty": kitty,
                "rarity": rarity.name(),
                "record": record,
                "stats": stats,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
