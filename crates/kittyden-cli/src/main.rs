use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "kittyden-cli", version, about = "Kittyden CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Kitty collection, stats, and gacha draws
    Kitty {
        #[command(subcommand)]
        action: commands::kitty::KittyAction,
    },
    /// Coin balance operations
    Coins {
        #[command(subcommand)]
        action: commands::coins::CoinsAction,
    },
    /// Pet care: feeding and the daily cycle
    Pet {
        #[command(subcommand)]
        action: commands::pet::PetAction,
    },
    /// The bank heist mini-game
    Heist {
        #[command(subcommand)]
        action: commands::heist::HeistAction,
    },
    /// Kick the Hooman mini-game
    Kick {
        #[command(subcommand)]
        action: commands::kick::KickAction,
    },
    /// The Never Have I Ever deck
    Nhie {
        #[command(subcommand)]
        action: commands::nhie::NhieAction,
    },
    /// Birthday book
    Birthday {
        #[command(subcommand)]
        action: commands::birthday::BirthdayAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Active user management
    User {
        #[command(subcommand)]
        action: commands::user::UserAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Kitty { action } => commands::kitty::run(action),
        Commands::Coins { action } => commands::coins::run(action),
        Commands::Pet { action } => commands::pet::run(action),
        Commands::Heist { action } => commands::heist::run(action),
        Commands::Kick { action } => commands::kick::run(action),
        Commands::Nhie { action } => commands::nhie::run(action),
        Commands::Birthday { action } => commands::birthday::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::User { action } => commands::user::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
