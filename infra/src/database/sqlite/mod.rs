//! SQLite repository implementations

mod favorite_repository_impl;
mod user_repository_impl;

pub use favorite_repository_impl::SqliteFavoriteRepository;
pub use user_repository_impl::SqliteUserRepository;

use chrono::{DateTime, SecondsFormat, Utc};
use ck_core::errors::DomainError;

/// Render a timestamp as fixed-width RFC 3339 text (microseconds, `Z`)
///
/// Fixed width keeps lexical and chronological order identical.
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| DomainError::store(format!("Invalid stored timestamp {value:?}: {e}")))
}

/// Log and wrap a store failure
pub(crate) fn store_error(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!(error = %error, "{context}");
    DomainError::store(format!("{context}: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_is_fixed_width_and_round_trips() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let text = format_timestamp(at);

        assert_eq!(text, "2024-03-09T07:05:01.000000Z");
        assert_eq!(parse_timestamp(&text).unwrap(), at);
    }

    #[test]
    fn test_garbage_timestamp_is_store_error() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(DomainError::StoreUnavailable { .. })
        ));
    }
}
