use std::collections::BTreeMap;

use thiserror::Error;

/// Field name to validation messages, ordered for stable responses
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

/// Errors produced by stores, market operations and command handlers
///
/// Expected failures are values of this type. `Storage` carries failures of
/// the embedded database itself and is never shown to clients in detail.
#[derive(Debug, Error)]
pub enum FootballError {
    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("Could not find entity with id {id} in collection {collection}")]
    NotFound { collection: &'static str, id: String },

    #[error("Entity with id {id} already exists in collection {collection}")]
    DuplicateId { collection: &'static str, id: String },

    #[error("{0}")]
    InvalidMarketOperation(String),

    #[error("{0}")]
    Other(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl FootballError {
    /// Creates a NotFound error for an id in a collection
    pub fn not_found(collection: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection,
            id: id.into(),
        }
    }

    /// Creates an InvalidMarketOperation error
    pub fn invalid_market_operation(message: impl Into<String>) -> Self {
        Self::InvalidMarketOperation(message.into())
    }

    /// Returns true for store-level NotFound errors
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type FootballResult<T> = Result<T, FootballError>;

/// Composition helpers on top of `FootballResult`
///
/// `map`, `and_then` and `match` come from `Result` itself; this adds the
/// error remapping step command handlers use to turn a missing entity into a
/// domain error.
pub trait FootballResultExt<T> {
    /// Replaces a NotFound error with the error built by `remap`, passing
    /// every other error and the success value through unchanged
    fn map_not_found<F>(self, remap: F) -> FootballResult<T>
    where
        F: FnOnce() -> FootballError;
}

impl<T> FootballResultExt<T> for FootballResult<T> {
    fn map_not_found<F>(self, remap: F) -> FootballResult<T>
    where
        F: FnOnce() -> FootballError,
    {
        match self {
            Err(e) if e.is_not_found() => Err(remap()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_positive(value: i32) -> FootballResult<u32> {
        if value > 0 {
            Ok(value as u32)
        } else {
            Err(FootballError::Other(format!("{} is not positive", value)))
        }
    }

    #[test]
    fn map_transforms_success_and_keeps_error() {
        let ok: FootballResult<u32> = Ok(20);
        assert_eq!(ok.map(|v| v * 2).unwrap(), 40);

        let err: FootballResult<u32> = Err(FootballError::not_found("players", "p1"));
        assert!(err.map(|v| v * 2).unwrap_err().is_not_found());
    }

    #[test]
    fn and_then_short_circuits_on_error() {
        let chained = parse_positive(-1).and_then(|v| parse_positive(v as i32 + 1));
        assert_eq!(chained.unwrap_err().to_string(), "-1 is not positive");

        let chained = parse_positive(1).and_then(|v| parse_positive(v as i32 + 1));
        assert_eq!(chained.unwrap(), 2);
    }

    #[test]
    fn match_handles_both_variants() {
        let describe = |r: FootballResult<u32>| match r {
            Ok(v) => format!("value {}", v),
            Err(e) => format!("error {}", e),
        };

        assert_eq!(describe(Ok(3)), "value 3");
        assert_eq!(
            describe(Err(FootballError::invalid_market_operation("nope"))),
            "error nope"
        );
    }

    #[test]
    fn map_not_found_remaps_only_not_found() {
        let remapped: FootballResult<()> = Err(FootballError::not_found("teams", "t1"))
            .map_not_found(|| FootballError::invalid_market_operation("team not found"));
        assert!(matches!(
            remapped,
            Err(FootballError::InvalidMarketOperation(ref m)) if m == "team not found"
        ));

        let untouched: FootballResult<()> = Err(FootballError::Storage("disk".to_string()))
            .map_not_found(|| FootballError::invalid_market_operation("team not found"));
        assert!(matches!(untouched, Err(FootballError::Storage(_))));

        let ok: FootballResult<u8> =
            Ok(7).map_not_found(|| FootballError::invalid_market_operation("unused"));
        assert_eq!(ok.unwrap(), 7);
    }

    #[test]
    fn not_found_message_names_collection_and_id() {
        let err = FootballError::not_found("players", "abc");
        assert_eq!(
            err.to_string(),
            "Could not find entity with id abc in collection players"
        );
    }
}
