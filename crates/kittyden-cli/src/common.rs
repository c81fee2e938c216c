//! Helpers shared across CLI commands.

use kittyden_core::storage::Database;

const USER_KEY: &str = "userName";

/// Resolve the acting user: an explicit `--user` flag wins, then the
/// stored active user, then "guest".
pub fn resolve_user(explicit: Option<String>, db: &Database) -> String {
    if let Some(user) = explicit {
        return user;
    }
    match db.kv_get(USER_KEY) {
        Ok(Some(name)) => name,
        _ => "guest".to_string(),
    }
}

/// Persist the active user name.
pub fn set_active_user(db: &Database, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    db.kv_set(USER_KEY, name)?;
    Ok(())
}

/// The stored active user, if any.
pub fn active_user(db: &Database) -> Option<String> {
    db.kv_get(USER_KEY).ok().flatten()
}
