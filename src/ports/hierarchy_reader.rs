use async_trait::async_trait;

use crate::domain::foundation::RagThresholds;
use crate::domain::hierarchy::HierarchySnapshot;

/// Read-only port for fetching the objective hierarchy.
///
/// One snapshot is loaded per computation and treated as immutable for
/// the duration of the pass.
#[async_trait]
pub trait HierarchyReader: Send + Sync {
    /// Fetches the full objective tree.
    async fn load_snapshot(&self) -> Result<HierarchySnapshot, HierarchyReadError>;

    /// Fetches the admin-edited threshold table, if one is stored.
    ///
    /// `None` means the deployment runs on the documented defaults.
    async fn load_thresholds(&self) -> Result<Option<RagThresholds>, HierarchyReadError>;
}

/// Errors that can occur while reading the hierarchy.
#[derive(Debug, thiserror::Error)]
pub enum HierarchyReadError {
    #[error("Access denied to the requested hierarchy scope")]
    AccessDenied,

    #[error("Backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockHierarchyReader;

    #[async_trait]
    impl HierarchyReader for MockHierarchyReader {
        async fn load_snapshot(&self) -> Result<HierarchySnapshot, HierarchyReadError> {
            Ok(HierarchySnapshot::default())
        }

        async fn load_thresholds(&self) -> Result<Option<RagThresholds>, HierarchyReadError> {
            Ok(None)
        }
    }

    #[test]
    fn reader_trait_is_object_safe() {
        let _reader: Box<dyn HierarchyReader> = Box::new(MockHierarchyReader);
    }

    #[test]
    fn error_messages_name_the_failure() {
        let err = HierarchyReadError::Backend("connection reset".to_string());
        assert_eq!(format!("{}", err), "Backend error: connection reset");

        let err = HierarchyReadError::AccessDenied;
        assert!(format!("{}", err).contains("Access denied"));
    }
}
