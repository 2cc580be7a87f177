//! Error types for the Product actor.

use crate::model::{ProductId, ValidationErrors};
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The submitted product data broke one or more field rules.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ProductError::NotFound(ProductId(4)).to_string(),
            "Product not found: 4"
        );
        let invalid = ProductError::from(ValidationErrors::single("name", "field required"));
        assert!(invalid.to_string().contains("name"));
        assert_eq!(
            ProductError::from("mailbox closed".to_string()).to_string(),
            "Actor communication error: mailbox closed"
        );
    }
}
