use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use kittyden_core::birthdays::{builtin, upcoming, Birthday, BirthdayBook};
use kittyden_core::storage::Database;

#[derive(Subcommand)]
pub enum BirthdayAction {
    /// List the user-added birthdays
    List,
    /// Show all birthdays sorted by how soon they come up
    Upcoming {
        /// Include the built-in list
        #[arg(long)]
        with_builtin: bool,
    },
    /// Add a birthday (date as YYYY-MM-DD)
    Add { name: String, date: NaiveDate },
    /// Remove a birthday by exact name and date
    Remove { name: String, date: NaiveDate },
}

pub fn run(action: BirthdayAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let book = BirthdayBook::new(&db);

    match action {
        BirthdayAction::List => {
            println!("{}", serde_json::to_string_pretty(&book.list())?);
        }
        BirthdayAction::Upcoming { with_builtin } => {
            let mut all = book.list();
            if with_builtin {
                all.extend(builtin());
            }
            let list = upcoming(&all, Utc::now().date_naive());
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        BirthdayAction::Add { name, date } => {
            book.add(Birthday { name: name.clone(), date })?;
            println!("added {name}");
        }
        BirthdayAction::Remove { name, date } => {
            if book.remove(&Birthday { name: name.clone(), date })? {
                println!("removed {name}");
            } else {
                eprintln!("no such birthday: {name} {date}");
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
