//! The birthday book.
//!
//! Two lists: a built-in read-only one compiled into the binary, and a
//! user-edited one persisted as a JSON array in the kv store. A birthday
//! is identified structurally by its (name, date) pair.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::storage::Database;

const USER_BIRTHDAYS_KEY: &str = "userBirthdays";

/// A person and their date of birth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Birthday {
    pub name: String,
    pub date: NaiveDate,
}

/// A birthday projected onto the calendar.
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The next anniversary.
    pub date: NaiveDate,
    pub days_away: i64,
}

/// Built-in birthdays compiled into the binary.
pub fn builtin() -> Vec<Birthday> {
    const ENTRIES: &[(&str, i32, u32, u32)] = &[
        ("Granny Whiskers", 1954, 1, 10),
        ("Captain Floof", 1984, 2, 16),
        ("Milo the Elder", 1995, 8, 23),
        ("Pawline Furrington", 2000, 4, 7),
        ("Sir Pounce", 2005, 6, 1),
        ("Miss Mittens", 2006, 10, 19),
        ("Tofu", 2007, 4, 1),
        ("Biscuit", 2008, 5, 20),
    ];
    ENTRIES
        .iter()
        .map(|(name, y, m, d)| Birthday {
            name: (*name).to_string(),
            date: NaiveDate::from_ymd_opt(*y, *m, *d).expect("valid builtin date"),
        })
        .collect()
}

/// The next anniversary of `date` on or after `today`.
pub fn next_occurrence(date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let anniversary = |year: i32| {
        // Feb 29 birthdays land on Mar 1 in non-leap years
        NaiveDate::from_ymd_opt(year, date.month(), date.day())
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists"))
    };
    let this_year = anniversary(today.year());
    if this_year >= today {
        this_year
    } else {
        anniversary(today.year() + 1)
    }
}

/// Project a list of birthdays onto the calendar, soonest first.
pub fn upcoming(birthdays: &[Birthday], today: NaiveDate) -> Vec<UpcomingBirthday> {
    let mut list: Vec<UpcomingBirthday> = birthdays
        .iter()
        .map(|b| {
            let next = next_occurrence(b.date, today);
            UpcomingBirthday {
                name: b.name.clone(),
                date: next,
                days_away: (next - today).num_days(),
            }
        })
        .collect();
    list.sort_by_key(|b| b.days_away);
    list
}

/// User-edited birthday list over the kv store.
pub struct BirthdayBook<'a> {
    db: &'a Database,
}

impl<'a> BirthdayBook<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All user-added birthdays, sorted by name.
    pub fn list(&self) -> Vec<Birthday> {
        match self.db.kv_get(USER_BIRTHDAYS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("malformed birthday list, treating as empty: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("failed to load birthday list: {e}");
                Vec::new()
            }
        }
    }

    fn save(&self, list: &[Birthday]) -> Result<(), CoreError> {
        let json = serde_json::to_string(list)?;
        self.db.kv_set(USER_BIRTHDAYS_KEY, &json)?;
        Ok(())
    }

    /// Add a birthday, keeping the list sorted by name.
    ///
    /// # Errors
    /// Returns an error if the name contains digits.
    pub fn add(&self, birthday: Birthday) -> Result<(), CoreError> {
        if birthday.name.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NameContainsDigits(birthday.name).into());
        }
        let mut list = self.list();
        list.push(birthday);
        list.sort_by(|a, b| a.name.cmp(&b.name));
        self.save(&list)
    }

    /// Remove a birthday by its structural identity. Returns whether an
    /// entry was removed.
    pub fn remove(&self, birthday: &Birthday) -> Result<bool, CoreError> {
        let mut list = self.list();
        let before = list.len();
        list.retain(|b| b != birthday);
        let removed = list.len() < before;
        if removed {
            self.save(&list)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let next = next_occurrence(date(2000, 12, 24), date(2026, 8, 6));
        assert_eq!(next, date(2026, 12, 24));
    }

    #[test]
    fn test_next_occurrence_already_passed() {
        let next = next_occurrence(date(2000, 2, 1), date(2026, 8, 6));
        assert_eq!(next, date(2027, 2, 1));
    }

    #[test]
    fn test_next_occurrence_today_counts() {
        let next = next_occurrence(date(2000, 8, 6), date(2026, 8, 6));
        assert_eq!(next, date(2026, 8, 6));
    }

    #[test]
    fn test_leap_day_lands_on_march_first() {
        let next = next_occurrence(date(2004, 2, 29), date(2026, 1, 1));
        assert_eq!(next, date(2026, 3, 1));
    }

    #[test]
    fn test_upcoming_sorted_soonest_first() {
        let birthdays = vec![
            Birthday { name: "far".into(), date: date(2000, 12, 1) },
            Birthday { name: "near".into(), date: date(2000, 8, 10) },
        ];
        let list = upcoming(&birthdays, date(2026, 8, 6));
        assert_eq!(list[0].name, "near");
        assert_eq!(list[0].days_away, 4);
        assert_eq!(list[1].name, "far");
    }

    #[test]
    fn test_add_rejects_names_with_digits() {
        let db = Database::open_memory().unwrap();
        let book = BirthdayBook::new(&db);
        let result = book.add(Birthday {
            name: "R2D2".into(),
            date: date(1977, 5, 25),
        });
        assert!(result.is_err());
        assert!(book.list().is_empty());
    }

    #[test]
    fn test_add_keeps_list_sorted_by_name() {
        let db = Database::open_memory().unwrap();
        let book = BirthdayBook::new(&db);
        book.add(Birthday { name: "Zora".into(), date: date(2001, 1, 1) })
            .unwrap();
        book.add(Birthday { name: "Ada".into(), date: date(2002, 2, 2) })
            .unwrap();
        let names: Vec<_> = book.list().into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Ada", "Zora"]);
    }

    #[test]
    fn test_remove_matches_structurally() {
        let db = Database::open_memory().unwrap();
        let book = BirthdayBook::new(&db);
        let ada1 = Birthday { name: "Ada".into(), date: date(2002, 2, 2) };
        let ada2 = Birthday { name: "Ada".into(), date: date(2003, 3, 3) };
        book.add(ada1.clone()).unwrap();
        book.add(ada2.clone()).unwrap();

        // Same name, different date: only the exact pair goes
        assert!(book.remove(&ada1).unwrap());
        let remaining = book.list();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0], ada2);

        // Removing again finds nothing
        assert!(!book.remove(&ada1).unwrap());
    }

    #[test]
    fn test_builtin_list_is_nonempty_and_sorted_dates_valid() {
        let list = builtin();
        assert!(!list.is_empty());
    }
}
