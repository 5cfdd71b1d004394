//! Catalogue records served by the product and stock endpoints.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Product metadata as returned by `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    /// Image URL.
    pub image: String,
}

/// Available quantity at the backing service (`GET /stock/{id}`).
///
/// This is warehouse stock, not the amount held in a cart. Signed because
/// backends may report oversold products as negative stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: i32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_stock_deserializes() {
        let stock: Stock = serde_json::from_str(r#"{ "id": 4, "amount": -2 }"#).unwrap();
        assert_eq!(stock.amount, -2);
        assert_eq!(stock.id, ProductId::new(4));
    }
}
