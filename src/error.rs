use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum BasketError {
    #[error("Checkout rejected: missing auth token")]
    Unauthorized,
    #[error("Checkout rejected: {0}")]
    CheckoutRejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error)]
pub enum OrderError {
    #[error("Order rejected: missing auth token")]
    Unauthorized,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors from the host-shell actors (navigation, dialogs).
#[derive(Debug, Clone, Error)]
pub enum ShellError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Anything the checkout flow can trip over. The flow's command handler
/// collapses every variant into one generic failure dialog; callers of
/// `initialize` see these directly.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Basket(#[from] BasketError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Shell(#[from] ShellError),
    #[error("Invalid buyer id: {0}")]
    InvalidBuyerId(#[from] uuid::Error),
    #[error("Checkout precondition not met: {0}")]
    MissingDraft(&'static str),
}
