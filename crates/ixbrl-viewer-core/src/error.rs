use thiserror::Error;

use crate::types::FactId;

/// Errors from the viewer core.
#[derive(Error, Debug)]
pub enum ViewerError {
    // --- FactSet errors ---
    #[error("a fact set needs at least one fact")]
    EmptyFactSet,

    #[error("fact {0} appears more than once in the fact set")]
    DuplicateFact(FactId),

    #[error("fact {0} is not a member of this fact set")]
    FactNotInSet(FactId),

    // --- Formatting errors ---
    #[error("fact {fact} does not have a numeric value")]
    NonNumericValue { fact: FactId },

    // --- Configuration errors ---
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_in_set_display() {
        let err = ViewerError::FactNotInSet(FactId::new("f42"));
        assert!(err.to_string().contains("f42"));
    }

    #[test]
    fn non_numeric_display() {
        let err = ViewerError::NonNumericValue {
            fact: FactId::new("f7"),
        };
        let s = err.to_string();
        assert!(s.contains("f7"));
        assert!(s.contains("numeric"));
    }

    #[test]
    fn config_error_converts() {
        let err: ViewerError = config::ConfigError::Message("bad separator".into()).into();
        assert!(matches!(err, ViewerError::Config(_)));
        assert!(err.to_string().contains("bad separator"));
    }
}
