//! Checkout: turns a cart into an order message and a messaging deep link.

pub mod config;
pub mod formatter;
pub mod link;

pub use config::CheckoutConfig;
pub use formatter::format_order;
pub use link::{build_checkout_link, checkout_link};
