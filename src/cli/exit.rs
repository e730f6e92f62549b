//! Process exit codes

use std::process::ExitCode;

use crate::domain::{ResolveError, ResolveErrorKind};
use crate::storage::StoreError;

/// Outcome of a command, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ExitStatus {
    #[default]
    Success,
    Other,
    StoreFailure,
    CycleDetected,
    ListNotFound,
}

impl ExitStatus {
    pub fn code(&self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Other => 3,
            ExitStatus::StoreFailure => 4,
            ExitStatus::CycleDetected => 5,
            ExitStatus::ListNotFound => 6,
        }
    }

    /// Returns the more severe of two outcomes
    pub fn worst(self, other: ExitStatus) -> ExitStatus {
        self.max(other)
    }

    /// Classifies a resolution failure
    pub fn from_resolve(error: &ResolveError) -> Self {
        match error.kind() {
            ResolveErrorKind::ListNotFound => ExitStatus::ListNotFound,
            ResolveErrorKind::CycleDetected => ExitStatus::CycleDetected,
        }
    }

    /// Classifies an arbitrary error by its root cause
    pub fn from_error(error: &anyhow::Error) -> Self {
        if let Some(e) = error.downcast_ref::<ResolveError>() {
            Self::from_resolve(e)
        } else if error.downcast_ref::<StoreError>().is_some() {
            ExitStatus::StoreFailure
        } else {
            ExitStatus::Other
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExternalId, ListCategory};

    #[test]
    fn codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::Other.code(), 3);
        assert_eq!(ExitStatus::StoreFailure.code(), 4);
        assert_eq!(ExitStatus::CycleDetected.code(), 5);
        assert_eq!(ExitStatus::ListNotFound.code(), 6);
    }

    #[test]
    fn worst_wins() {
        assert_eq!(
            ExitStatus::Success.worst(ExitStatus::CycleDetected),
            ExitStatus::CycleDetected
        );
        assert_eq!(
            ExitStatus::ListNotFound.worst(ExitStatus::StoreFailure),
            ExitStatus::ListNotFound
        );
    }

    #[test]
    fn classify_errors() {
        let cycle: anyhow::Error = ResolveError::CycleDetected { path: vec![] }.into();
        assert_eq!(ExitStatus::from_error(&cycle), ExitStatus::CycleDetected);

        let store: anyhow::Error = StoreError::UnknownId {
            category: ListCategory::File,
            id: ExternalId(1),
        }
        .into();
        assert_eq!(ExitStatus::from_error(&store), ExitStatus::StoreFailure);

        let other = anyhow::anyhow!("boom");
        assert_eq!(ExitStatus::from_error(&other), ExitStatus::Other);
    }
}
