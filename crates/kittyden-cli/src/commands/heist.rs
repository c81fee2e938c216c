use clap::Subcommand;
use kittyden_core::currency::{CoinBank, CoinPolicy};
use kittyden_core::games::heist::{run_heist, BankJob, HeistTeam};
use kittyden_core::progression::{Collection, ProgressionStore};
use kittyden_core::storage::{Config, Database, ReadCache};

use crate::common::resolve_user;

#[derive(Subcommand)]
pub enum HeistAction {
    /// Assemble a crew and rob a bank
    Run {
        /// Which bank: "local" or "city"
        #[arg(long, default_value = "local")]
        bank: String,
        /// Coins staked on the job
        #[arg(long, default_value = "10")]
        stake: u64,
        /// Kitty filling the Brain role
        #[arg(long)]
        brain: Option<String>,
        /// Kitty filling the Stealer role
        #[arg(long)]
        stealer: Option<String>,
        /// Kitty filling the Tank role
        #[arg(long)]
        tank: Option<String>,
        /// Kitty filling the Lucky Charm role
        #[arg(long)]
        lucky_charm: Option<String>,
        #[arg(long)]
        user: Option<String>,
    },
}

fn parse_bank(name: &str) -> Result<BankJob, String> {
    match name.to_ascii_lowercase().as_str() {
        "local" => Ok(BankJob::Local),
        "city" => Ok(BankJob::City),
        other => Err(format!("unknown bank '{other}' (expected local or city)")),
    }
}

pub fn run(action: HeistAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();

    match action {
        HeistAction::Run {
            bank,
            stake,
            brain,
            stealer,
            tank,
            lucky_charm,
            user,
        } => {
            let user = resolve_user(user, &db);
            let bank_job = parse_bank(&bank)?;
            let team = HeistTeam {
                brain,
                stealer,
                tank,
                lucky_charm,
            };

            // Only unlocked kitties can work a job
            let collection = Collection::new(&db);
            for (_, kitty) in team.members() {
                if !collection.is_unlocked(kitty) {
                    return Err(format!("kitty '{kitty}' is not unlocked").into());
                }
            }

            let mut cache = ReadCache::new();
            let mut coin_bank = CoinBank::new(&db, &mut cache, CoinPolicy::from_config(&config));
            let progression = ProgressionStore::new(&db);
            let mut rng = rand::thread_rng();

            let report = run_heist(
                bank_job,
                stake,
                &team,
                &mut coin_bank,
                &progression,
                &user,
                &mut rng,
            )?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
