use thiserror::Error;

/// The only recoverable failures in this crate. Everything else degrades to
/// zero frames or hard-coded fallbacks rather than propagating.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresentError {
    #[error("a presentation is already active or mid-transition")]
    AlreadyPresenting,

    #[error("no active presentation to dismiss")]
    NothingToDismiss,

    #[error("a dismissal is already in progress")]
    DismissalInProgress,
}
