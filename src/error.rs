//! Errors surfaced by tournament operations.

use thiserror::Error;

/// Failure of a tournament operation. Every variant aborts the enclosing transaction.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// Event, match or team does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness or referential conflict (duplicate team name, team still in use).
    #[error("{0}")]
    Conflict(String),

    /// Transaction or connectivity failure.
    #[error("Database error: {0}")]
    Storage(sqlx::Error),
}

impl TournamentError {
    pub fn not_found(what: &str, id: i32) -> Self {
        TournamentError::NotFound(format!("{what} {id} not found"))
    }

    /// Message that is safe to return to clients. Storage details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::Storage(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<sqlx::Error> for TournamentError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                TournamentError::Conflict("Record already exists".to_string())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                TournamentError::Conflict("Record is referenced by other records".to_string())
            }
            _ => TournamentError::Storage(err),
        }
    }
}

pub type TournamentResult<T> = Result<T, TournamentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_are_sanitized() {
        let err = TournamentError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, TournamentError::Storage(_)));
        assert_eq!(err.client_message(), "Internal server error");
    }

    #[test]
    fn other_errors_keep_their_message() {
        let err = TournamentError::not_found("Match", 12);
        assert_eq!(err.client_message(), "Match 12 not found");
    }
}
