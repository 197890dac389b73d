use thiserror::Error;

/// Errors that can occur when validating a dun before it is saved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DunError {
    #[error("Duns cannot be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dun_error_display() {
        assert_eq!(DunError::Empty.to_string(), "Duns cannot be empty");
    }
}
