use clap::Subcommand;
use kittyden_core::storage::Database;

use crate::common::{active_user, set_active_user};

#[derive(Subcommand)]
pub enum UserAction {
    /// Set the active user name
    Set { name: String },
    /// Show the active user name
    Show,
}

pub fn run(action: UserAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        UserAction::Set { name } => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err("user name cannot be empty".into());
            }
            set_active_user(&db, trimmed)?;
            println!("active user: {trimmed}");
        }
        UserAction::Show => match active_user(&db) {
            Some(name) => println!("{name}"),
            None => println!("guest"),
        },
    }
    Ok(())
}
