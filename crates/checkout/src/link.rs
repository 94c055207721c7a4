use digimenu_cart::Cart;

use crate::config::CheckoutConfig;
use crate::formatter::format_order;

/// `{base_url}/{recipient}?text={encoded}`.
///
/// Everything outside the RFC 3986 unreserved set (`A-Z a-z 0-9 - _ . ~`) is
/// percent-encoded as UTF-8, so newlines, spaces, `*`, `–` and emoji all
/// survive and decoding yields `order_text` byte for byte.
pub fn build_checkout_link(base_url: &str, recipient: &str, order_text: &str) -> String {
    format!(
        "{}/{}?text={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(recipient),
        urlencoding::encode(order_text)
    )
}

/// Format `cart` and wrap it into a checkout link per `config`.
pub fn checkout_link(cart: &Cart, config: &CheckoutConfig) -> String {
    let text = format_order(cart, &config.currency);
    build_checkout_link(&config.base_url, &config.recipient, &text)
}
