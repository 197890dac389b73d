//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `DataSourceError` from `duns_core::storage`.
//! Specific errors are mapped to semantic variants (e.g., no rows to NotFound).

use duns_core::storage::DataSourceError;

/// Maps a rusqlite error to a DataSourceError.
///
/// # Error Mapping
///
/// - Conversion failures → `DataSourceError::InvalidData`
/// - Connection errors → `DataSourceError::ConnectionFailed`
/// - All other errors → `DataSourceError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error) -> DataSourceError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            DataSourceError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::FromSqlConversionFailure(..) | rusqlite::Error::InvalidColumnType(..) => {
            DataSourceError::InvalidData(err.to_string())
        }

        _ => DataSourceError::QueryFailed(err.to_string()),
    }
}

/// Maps a rusqlite error with a known ID to a DataSourceError.
fn map_rusqlite_error_with_id(err: &rusqlite::Error, id: &str) -> DataSourceError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => DataSourceError::NotFound { id: id.to_string() },
        _ => map_rusqlite_error(err),
    }
}

/// Maps a tokio_rusqlite error to a DataSourceError.
///
/// This is the main entry point for error mapping in async code.
/// It extracts the inner `rusqlite::Error` if present, otherwise
/// maps to a generic `QueryFailed` error.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> DataSourceError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err),
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            DataSourceError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => DataSourceError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error with a known ID to a DataSourceError.
///
/// Use this variant when the dun ID is known at the call site.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    id: impl Into<String>,
) -> DataSourceError {
    let id_str = id.into();
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error_with_id(rusqlite_err, &id_str)
        }
        _ => map_tokio_rusqlite_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rows_with_id_maps_to_not_found() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        let result = map_tokio_rusqlite_error_with_id(err, "abc-123");

        assert_eq!(
            result,
            DataSourceError::NotFound {
                id: "abc-123".to_string()
            }
        );
    }

    #[test]
    fn test_no_rows_without_id_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        let result = map_tokio_rusqlite_error(err);

        assert!(matches!(result, DataSourceError::QueryFailed(_)));
    }

    #[test]
    fn test_conversion_failure_maps_to_invalid_data() {
        let rusqlite_err = rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Integer,
            Box::new(std::io::Error::other("bad flag")),
        );
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite_err);

        let result = map_tokio_rusqlite_error(err);

        assert!(matches!(result, DataSourceError::InvalidData(_)));
    }

    #[test]
    fn test_cannot_open_maps_to_connection_failed() {
        let sqlite_err = rusqlite::ffi::Error {
            code: rusqlite::ErrorCode::CannotOpen,
            extended_code: rusqlite::ffi::SQLITE_CANTOPEN,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        let result = map_tokio_rusqlite_error(err);

        assert!(matches!(result, DataSourceError::ConnectionFailed(_)));
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed);

        assert!(matches!(result, DataSourceError::ConnectionFailed(_)));
    }

    #[test]
    fn test_other_error_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error(err);

        assert!(matches!(result, DataSourceError::QueryFailed(_)));
    }
}
