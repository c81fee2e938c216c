use clap::Subcommand;
use kittyden_core::currency::{CoinBank, CoinPolicy};
use kittyden_core::storage::{Config, Database, ReadCache};

use crate::common::resolve_user;

#[derive(Subcommand)]
pub enum CoinsAction {
    /// Show the current balance
    Balance {
        #[arg(long)]
        user: Option<String>,
    },
    /// Add coins
    Reward {
        amount: u64,
        #[arg(long)]
        user: Option<String>,
    },
    /// Spend coins; fails without deducting if the balance is short
    Spend {
        amount: u64,
        #[arg(long)]
        user: Option<String>,
    },
    /// Subtract coins, clamped at the floor
    Penalty {
        amount: u64,
        #[arg(long)]
        user: Option<String>,
    },
}

pub fn run(action: CoinsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();
    let mut cache = ReadCache::new();
    let mut bank = CoinBank::new(&db, &mut cache, CoinPolicy::from_config(&config));

    match action {
        CoinsAction::Balance { user } => {
            let user = resolve_user(user, &db);
            println!("{}", bank.balance(&user));
        }
        CoinsAction::Reward { amount, user } => {
            let user = resolve_user(user, &db);
            println!("{}", bank.reward(&user, amount));
        }
        CoinsAction::Spend { amount, user } => {
            let user = resolve_user(user, &db);
            if bank.spend(&user, amount) {
                println!("{}", bank.balance(&user));
            } else {
                eprintln!("insufficient coins: balance {}", bank.balance(&user));
                std::process::exit(1);
            }
        }
        CoinsAction::Penalty { amount, user } => {
            let user = resolve_user(user, &db);
            println!("{}", bank.penalty(&user, amount));
        }
    }
    Ok(())
}
