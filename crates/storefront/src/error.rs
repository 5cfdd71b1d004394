//! Cart operation errors and their user-facing messages.
//!
//! Every cart operation returns `Result<T, CartError>` so callers can match on
//! the cause, and also reports the failure once through the notification
//! sink using the fixed message for that operation (see [`messages`]).

use rocketshoes_core::ProductId;
use thiserror::Error;

use crate::catalog::ApiError;
use crate::storage::StorageError;

/// User-visible notification texts.
pub mod messages {
    /// Requested quantity is out of stock.
    pub const OUT_OF_STOCK: &str = "Quantidade solicitada fora de estoque";

    /// Adding a product failed.
    pub const ADD_FAILED: &str = "Erro na adição do produto";

    /// Removing a product failed.
    pub const REMOVE_FAILED: &str = "Erro na remoção do produto";

    /// Changing a product's quantity failed.
    pub const UPDATE_AMOUNT_FAILED: &str = "Erro na alteração de quantidade do produto";
}

/// Why a cart operation was rejected or failed.
#[derive(Debug, Error)]
pub enum CartError {
    /// Not enough stock for the requested quantity.
    #[error("Product {product_id} out of stock (available: {available})")]
    OutOfStock {
        product_id: ProductId,
        available: i32,
    },

    /// The product is not in the cart.
    #[error("Product {0} is not in the cart")]
    NotFound(ProductId),

    /// A catalogue API call failed.
    #[error("Catalogue API error: {0}")]
    Network(#[from] ApiError),

    /// Reading or writing the persisted cart failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// The public cart operations, for choosing a failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

impl CartOperation {
    /// Generic failure message for this operation.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Add => messages::ADD_FAILED,
            Self::Remove => messages::REMOVE_FAILED,
            Self::UpdateAmount => messages::UPDATE_AMOUNT_FAILED,
        }
    }
}

impl CartError {
    /// The message shown to the user when `operation` fails with this error.
    ///
    /// Stock rejections get their own message; every other cause maps to the
    /// operation's generic failure text.
    #[must_use]
    pub const fn user_message(&self, operation: CartOperation) -> &'static str {
        match self {
            Self::OutOfStock { .. } => messages::OUT_OF_STOCK,
            Self::NotFound(_) | Self::Network(_) | Self::Storage(_) => {
                operation.failure_message()
            }
        }
    }

    /// Whether this is a business-rule rejection rather than a failure.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::OutOfStock { .. } | Self::NotFound(_))
    }
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        let err = CartError::NotFound(ProductId::new(4));
        assert_eq!(err.to_string(), "Product 4 is not in the cart");

        let err = CartError::OutOfStock {
            product_id: ProductId::new(2),
            available: 1,
        };
        assert_eq!(err.to_string(), "Product 2 out of stock (available: 1)");
    }

    #[test]
    fn test_user_messages() {
        let out_of_stock = CartError::OutOfStock {
            product_id: ProductId::new(1),
            available: 0,
        };
        for op in [
            CartOperation::Add,
            CartOperation::Remove,
            CartOperation::UpdateAmount,
        ] {
            assert_eq!(out_of_stock.user_message(op), messages::OUT_OF_STOCK);
        }

        let not_found = CartError::NotFound(ProductId::new(1));
        assert_eq!(
            not_found.user_message(CartOperation::Remove),
            "Erro na remoção do produto"
        );
        assert_eq!(
            not_found.user_message(CartOperation::UpdateAmount),
            "Erro na alteração de quantidade do produto"
        );

        let network = CartError::Network(ApiError::NotFound("stock/1".to_string()));
        assert_eq!(
            network.user_message(CartOperation::Add),
            "Erro na adição do produto"
        );
        assert!(!network.is_rejection());
        assert!(not_found.is_rejection());
    }
}
