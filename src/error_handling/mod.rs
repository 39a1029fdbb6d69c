//! Error types.
//!
//! Only serialization and snapshot writing can fail. Accounting operations
//! (reset, recompute, site lookup and insertion) are total and never return
//! errors.

mod types;

// Re-export public API
pub use types::{InitializationError, SaveError, SnapshotError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_error_messages() {
        assert_eq!(
            SaveError::MissingSiteId.to_string(),
            "Site entry has no identifier"
        );
        let err = SaveError::Site {
            site_id: "example".to_string(),
            reason: "host table unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to save site 'example': host table unavailable"
        );
    }

    #[test]
    fn test_snapshot_error_wraps_save_error() {
        let err = SnapshotError::from(SaveError::MissingSiteId);
        assert!(matches!(err, SnapshotError::Save(SaveError::MissingSiteId)));
        assert!(err.to_string().contains("Site entry has no identifier"));
    }

    #[test]
    fn test_snapshot_error_wraps_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SnapshotError::from(io);
        assert!(matches!(err, SnapshotError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
