use thiserror::Error;

/// Errors a [`CartClient`](crate::clients::CartClient) can return.
///
/// Cart mutations never fail from the caller's point of view; the only
/// failure is losing the service itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
