//! Errors from collecting modaliases

use std::path::PathBuf;

/// Errors that abort a collection run.
///
/// Unreadable individual `modalias` files are not errors, they are skipped.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CollectError {
    #[error("Failed to traverse scan root {path:?}: {source}")]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write modaliases: {0}")]
    Output(#[from] std::io::Error),
}

impl CollectError {
    /// True if the error is the reader of our output going away.
    ///
    /// That is not a failure of ours (think `modkoll | head -n1`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Output(err) => err.kind() == std::io::ErrorKind::BrokenPipe,
            Self::RootInaccessible { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_pipe() {
        let err = CollectError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(err.is_broken_pipe());

        let err = CollectError::from(std::io::Error::from(std::io::ErrorKind::Other));
        assert!(!err.is_broken_pipe());

        let err = CollectError::RootInaccessible {
            path: "/sys".into(),
            source: std::io::Error::from(std::io::ErrorKind::BrokenPipe),
        };
        assert!(!err.is_broken_pipe());
    }

    #[test]
    fn test_display() {
        let err = CollectError::RootInaccessible {
            path: "/nonexistent".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("Failed to traverse scan root \"/nonexistent\""));
    }
}
