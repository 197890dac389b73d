//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use duns_core::dun::Dun;
use rusqlite::Row;

/// Convert a SQLite row to a Dun.
///
/// Expected columns: entryid, title, description, completed
pub fn row_to_dun(row: &Row) -> rusqlite::Result<Dun> {
    let id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let description: String = row.get(2)?;
    let completed: i64 = row.get(3)?;

    Ok(Dun {
        id,
        title,
        description,
        completed: parse_completed(completed)?,
    })
}

/// Convert the completion flag to its column value.
pub fn completed_to_int(completed: bool) -> i64 {
    i64::from(completed)
}

/// Parse the completion flag, rejecting anything but 0 or 1.
fn parse_completed(value: i64) -> rusqlite::Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Integer,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid completed flag: {}", value),
            )),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_to_int() {
        assert_eq!(completed_to_int(true), 1);
        assert_eq!(completed_to_int(false), 0);
    }

    #[test]
    fn test_parse_completed_valid() {
        assert!(!parse_completed(0).unwrap());
        assert!(parse_completed(1).unwrap());
    }

    #[test]
    fn test_parse_completed_invalid() {
        assert!(parse_completed(2).is_err());
        assert!(parse_completed(-1).is_err());
    }

    #[test]
    fn test_row_to_dun() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let dun = conn
            .query_row(
                "SELECT 'a', 'Pisa', 'Tower', 1",
                [],
                row_to_dun,
            )
            .unwrap();

        assert_eq!(
            dun,
            Dun::new("Pisa", "Tower").with_id("a").with_completed(true)
        );
    }
}
