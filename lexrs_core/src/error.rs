use thiserror::Error;

/// Outward error signal for every fallible operation in the adapter.
///
/// This is a value that is returned and matched on, never panicked.
/// Success is the `Ok` branch of `Result<T, ErrorCode>`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A required configuration field is missing or empty.
    #[error("invalid lex configuration: required field missing or empty")]
    InvalidLexConfiguration,

    /// A required collaborator was absent at construction time.
    #[error("invalid argument: required collaborator absent")]
    InvalidArgument,

    /// The transport or the remote service reported a failure.
    #[error("remote call failed")]
    RemoteCallFailed,

    /// A conversation turn was attempted while another is in flight.
    #[error("conversation turn already in flight")]
    TurnInFlight,
}
