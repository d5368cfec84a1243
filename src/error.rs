use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Catalog transport error: {0}")]
    Transport(String),
    #[error("Catalog parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
