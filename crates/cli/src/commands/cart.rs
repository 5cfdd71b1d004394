//! Cart commands.
//!
//! Failed operations have already been reported through the notifier by the
//! time they return, so the error is only passed up for the exit status.

use std::fmt::Write as _;

use rocketshoes_core::{Cart, ProductId};
use rocketshoes_storefront::UpdateProductAmount;
use rocketshoes_storefront::state::AppState;
use tracing::info;

/// Print the cart.
#[allow(clippy::print_stdout)] // The rendered cart is this command's output
pub fn show(state: &AppState) {
    print!("{}", render(&state.cart().cart()));
}

/// Add one unit of a product.
///
/// # Errors
///
/// Returns the cart error if the product could not be added.
pub async fn add(state: &AppState, product_id: ProductId) -> Result<(), Box<dyn std::error::Error>> {
    state.cart().add_product(product_id).await?;
    info!(%product_id, "Added to cart");
    show(state);
    Ok(())
}

/// Remove a product from the cart.
///
/// # Errors
///
/// Returns the cart error if the product is not in the cart or storage fails.
pub async fn remove(
    state: &AppState,
    product_id: ProductId,
) -> Result<(), Box<dyn std::error::Error>> {
    state.cart().remove_product(product_id).await?;
    info!(%product_id, "Removed from cart");
    show(state);
    Ok(())
}

/// Set a product's quantity.
///
/// # Errors
///
/// Returns the cart error if the update was rejected or failed.
pub async fn update(
    state: &AppState,
    product_id: ProductId,
    amount: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    state
        .cart()
        .update_product_amount(UpdateProductAmount { product_id, amount })
        .await?;
    show(state);
    Ok(())
}

/// Render the cart as a plain-text table with subtotals and total.
pub fn render(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Cart is empty\n".to_string();
    }

    let mut out = String::new();
    for item in cart {
        let _ = writeln!(
            out,
            "#{:<4} {:<56} {:>3} x {:>12} = {:>12}",
            item.id.as_i32(),
            item.title,
            item.amount,
            item.price.format_brl(),
            item.subtotal().format_brl()
        );
    }
    let _ = writeln!(
        out,
        "{} item(s), total {}",
        cart.len(),
        cart.total().format_brl()
    );
    out
}
