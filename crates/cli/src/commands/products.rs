//! Product listing command.

use std::collections::HashMap;
use std::fmt::Write as _;

use rocketshoes_core::{Product, ProductId};
use rocketshoes_storefront::state::AppState;

/// Print the catalogue with prices and in-cart amounts.
///
/// # Errors
///
/// Returns an error if the catalogue cannot be fetched.
#[allow(clippy::print_stdout)] // The listing is this command's output
pub async fn list(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    let products = state.catalog().list_products().await?;
    let in_cart = state.cart().cart().amounts();
    print!("{}", render(&products, &in_cart));
    Ok(())
}

/// Render products as a plain-text listing.
pub fn render(products: &[Product], in_cart: &HashMap<ProductId, u32>) -> String {
    let mut out = String::new();
    for product in products {
        let held = in_cart.get(&product.id).copied().unwrap_or(0);
        let _ = writeln!(
            out,
            "#{:<4} {:<56} {:>12}  [{held} in cart]",
            product.id.as_i32(),
            product.title,
            product.price.format_brl()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use rocketshoes_core::Price;

    use super::*;

    #[test]
    fn test_render_shows_cart_amounts() {
        let products = vec![
            Product {
                id: ProductId::new(1),
                title: "Tênis A".to_string(),
                price: Price::from_cents(17990),
                image: "a.jpg".to_string(),
            },
            Product {
                id: ProductId::new(2),
                title: "Tênis B".to_string(),
                price: Price::from_cents(13990),
                image: "b.jpg".to_string(),
            },
        ];
        let in_cart = HashMap::from([(ProductId::new(2), 3)]);

        let rendered = render(&products, &in_cart);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines.first().is_some_and(|line| line.ends_with("[0 in cart]")));
        assert!(lines.last().is_some_and(|line| line.contains("R$ 139,90")));
        assert!(lines.last().is_some_and(|line| line.ends_with("[3 in cart]")));
    }
}
