use digimenu_cart::Cart;

pub const ORDER_HEADER: &str = "🛒 *Pedido:*";

/// Render the cart as the order message sent at checkout.
///
/// Layout: header, blank line, one `- {qty}x {name} – {currency} {line total}`
/// per line (cart order), blank line, `*Total:* {currency} {total}`.
pub fn format_order(cart: &Cart, currency: &str) -> String {
    let mut lines = Vec::with_capacity(cart.lines().len() + 4);
    lines.push(ORDER_HEADER.to_string());
    lines.push(String::new());

    for line in cart.lines() {
        lines.push(format!(
            "- {}x {} – {} {}",
            line.quantity,
            line.name,
            currency,
            line.line_total()
        ));
    }

    lines.push(String::new());
    lines.push(format!("*Total:* {} {}", currency, cart.total_value()));
    lines.join("\n")
}
