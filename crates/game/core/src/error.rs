//! Common error infrastructure for duel-core.
//!
//! Nothing in this crate aborts a battle. Errors exist so that a failing
//! action handler can report *why* it did nothing; the dispatcher turns every
//! error into a diagnostic log line and carries on.
//!
//! # Design Principles
//!
//! - **Type Safety**: handler failures are a closed `thiserror` enum
//! - **Rich Context**: errors carry the action identifier and the parameter at fault
//! - **Severity Classification**: errors are categorized so callers can filter diagnostics

use crate::effect::ActionKind;

/// Severity level of an error, used for categorization and log filtering.
///
/// - **Recoverable**: the action was skipped but the catalog data is fine
/// - **Validation**: the catalog data is incomplete or malformed
/// - **Internal**: an engine invariant guard fired (e.g. runaway trigger recursion)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Nothing to act on right now.
    ///
    /// Examples: `restart_countdown` outside a countdown event
    Recoverable,

    /// Catalog data is missing a required parameter or carries an unusable one.
    ///
    /// Examples: `add_status` without a status key
    Validation,

    /// The engine refused to go deeper.
    ///
    /// Examples: dispatch depth exceeded
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all duel-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on whether the catalog or the engine is at fault
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failure of a single action handler invocation.
///
/// Returned by handlers in the action table and caught at the dispatcher
/// boundary, which logs it and treats the invocation as a no-op.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("{action} requires a `{parameter}` parameter")]
    MissingParameter {
        action: ActionKind,
        parameter: &'static str,
    },

    #[error("{action} cannot use {parameter} = {value}")]
    InvalidParameter {
        action: ActionKind,
        parameter: &'static str,
        value: String,
    },

    #[error("{action} has nothing to act on: {reason}")]
    NoTarget {
        action: ActionKind,
        reason: &'static str,
    },

    #[error("dispatch depth {depth} exceeded while raising {trigger}")]
    DispatchDepth { trigger: String, depth: u32 },
}

impl ActionError {
    pub fn missing(action: ActionKind, parameter: &'static str) -> Self {
        Self::MissingParameter { action, parameter }
    }

    pub fn invalid(action: ActionKind, parameter: &'static str, value: impl ToString) -> Self {
        Self::InvalidParameter {
            action,
            parameter,
            value: value.to_string(),
        }
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingParameter { .. } | Self::InvalidParameter { .. } => {
                ErrorSeverity::Validation
            }
            Self::NoTarget { .. } => ErrorSeverity::Recoverable,
            Self::DispatchDepth { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingParameter { .. } => "ACTION_MISSING_PARAMETER",
            Self::InvalidParameter { .. } => "ACTION_INVALID_PARAMETER",
            Self::NoTarget { .. } => "ACTION_NO_TARGET",
            Self::DispatchDepth { .. } => "DISPATCH_DEPTH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_is_a_validation_error() {
        let err = ActionError::missing(ActionKind::AddStatus, "status");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.to_string(), "add_status requires a `status` parameter");
    }

    #[test]
    fn depth_errors_are_internal() {
        let err = ActionError::DispatchDepth {
            trigger: "onGainArmor".into(),
            depth: 16,
        };
        assert_eq!(err.severity(), ErrorSeverity::Internal);
        assert!(!err.severity().is_recoverable());
    }
}
