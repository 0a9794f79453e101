//! Error type for row access operations.
//!
//! Two kinds carry row-access semantics: `Conflict` (an existence check found
//! a match) and `NotFound` (a keyed lookup found nothing). Every other
//! failure is whatever the executor reported, passed through as `Backend`
//! without translation or retries.

use std::fmt;

/// Error type for row access operations
#[derive(Debug)]
pub enum RowError {
    /// An existence check found a matching row (or dependent rows)
    Conflict(String),
    /// A keyed lookup matched no row
    NotFound(String),
    /// Failure surfaced by the executor (driver, connectivity, the SQL itself)
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl RowError {
    /// Wrap an executor failure.
    ///
    /// Accepts anything convertible into a boxed error, including plain
    /// strings.
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        RowError::Backend(err.into())
    }

    /// Whether this error is the conflict kind.
    pub fn is_conflict(&self) -> bool {
        matches!(self, RowError::Conflict(_))
    }

    /// Whether this error is the not-found kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RowError::NotFound(_))
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            RowError::NotFound(msg) => write!(f, "Not found: {msg}"),
            RowError::Backend(err) => write!(f, "Backend error: {err}"),
        }
    }
}

impl std::error::Error for RowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RowError::Backend(err) => Some(&**err as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_kinds() {
        let err = RowError::Conflict("table \"t\" primary key (id) value (1) already exists".to_string());
        assert!(err.to_string().starts_with("Conflict: "));

        let err = RowError::NotFound("table \"t\" primary key (id) value (9) not found".to_string());
        assert!(err.to_string().starts_with("Not found: "));

        let err = RowError::backend("connection reset");
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_classification() {
        assert!(RowError::Conflict(String::new()).is_conflict());
        assert!(!RowError::Conflict(String::new()).is_not_found());
        assert!(RowError::NotFound(String::new()).is_not_found());
        assert!(!RowError::backend("boom").is_conflict());
        assert!(!RowError::backend("boom").is_not_found());
    }

    #[test]
    fn test_backend_source_is_preserved() {
        let err = RowError::backend("disk full");
        let source = std::error::Error::source(&err).expect("backend source");
        assert_eq!(source.to_string(), "disk full");
    }
}
