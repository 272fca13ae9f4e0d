// ─────────────────────────────────────────────────────────────────────
// Layconn — Layout Connectivity Kernel Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Layconn failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayconnError {
    /// Lookup of an unknown global net (by id or by name).
    #[error("not found: {0}")]
    NotFound(String),

    /// Rule deck failed to parse or validate.
    #[error("config error: {0}")]
    Config(String),
}

impl LayconnError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LayconnError::NotFound(_))
    }
}

pub type LayconnResult<T> = Result<T, LayconnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_not_found() {
        let err = LayconnError::NotFound("global net id 7".into());
        assert_eq!(err.to_string(), "not found: global net id 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_display_config() {
        let err = LayconnError::Config("bad deck".into());
        assert_eq!(err.to_string(), "config error: bad deck");
        assert!(!err.is_not_found());
    }
}
