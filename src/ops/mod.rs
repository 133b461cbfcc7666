//! High-level operations behind each command.
//!
//! Every operation prefers the remote collaborator when one is configured and
//! substitutes the local guidance engine when it is not, or when the call
//! fails. A failed remote call never fails the operation; its reason is
//! reported alongside the result.

pub mod challenge;
pub mod context;
pub mod history;
pub mod journey;
pub mod reflect;
pub mod wisdom;

use context::RemoteAttempt;

// Re-export commonly used functions
pub use challenge::challenge;
pub use context::GuidanceContext;
pub use history::history;
pub use journey::journey;
pub use reflect::{reflect, ReflectOutcome};
pub use wisdom::wisdom;

/// A result and, when the remote call failed, why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidanceOutcome<T> {
    pub value: T,
    pub fallback_reason: Option<String>,
}

impl<T> GuidanceOutcome<T> {
    pub fn new(value: T) -> Self {
        GuidanceOutcome {
            value,
            fallback_reason: None,
        }
    }

    pub(crate) fn resolve<F: FnOnce() -> T>(attempt: RemoteAttempt<T>, local: F) -> Self {
        match attempt {
            RemoteAttempt::Succeeded(value) => GuidanceOutcome::new(value),
            RemoteAttempt::Disabled => GuidanceOutcome::new(local()),
            RemoteAttempt::Failed(reason) => GuidanceOutcome {
                value: local(),
                fallback_reason: Some(reason),
            },
        }
    }
}
