//! Render-only view models.
//!
//! Every UI region is a plain serializable value computed from session state;
//! nothing here holds callbacks or mutates anything. Actions are identified by
//! the `UiCommand` a front-end should dispatch.

use serde::Serialize;

use digimenu_cart::Cart;
use digimenu_catalog::{Catalog, Category};
use digimenu_checkout::{CheckoutConfig, checkout_link};
use digimenu_core::{Money, ProductId};

pub const PAGE_TITLE: &str = "🍔 Cardápio Digital";
pub const REVIEW_TITLE: &str = "🧾 Revisar pedido";
pub const REVIEW_BUTTON_LABEL: &str = "Revisar pedido";
pub const CHECKOUT_LABEL: &str = "Finalizar no WhatsApp";

/// Whole page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub title: String,
    pub categories: Vec<CategoryTab>,
    pub grid: ProductGrid,
    pub summary: SummaryBar,
    /// Present only while the review panel is open.
    pub review: Option<ReviewPanel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    pub category: Category,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductGrid {
    pub category: Category,
    pub cards: Vec<ProductCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    pub price_label: String,
    /// Units of this product currently in the cart.
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryBar {
    pub item_count: u32,
    pub total: Money,
    pub text: String,
    pub review_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewPanel {
    pub title: String,
    pub rows: Vec<ReviewRow>,
    pub total: Money,
    pub total_text: String,
    pub checkout: CheckoutAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub line_total: Money,
    pub line_total_label: String,
}

/// The checkout button: a label plus the deep link it opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutAction {
    pub label: String,
    pub url: String,
}

fn money_label(currency: &str, amount: Money) -> String {
    format!("{currency} {amount}")
}

pub fn category_tabs(selected: Category) -> Vec<CategoryTab> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryTab {
            category,
            label: category.label().to_string(),
            selected: category == selected,
        })
        .collect()
}

/// Cards for every active product in `category`, in catalog order.
pub fn product_grid(catalog: &Catalog, cart: &Cart, category: Category, currency: &str) -> ProductGrid {
    let cards = catalog
        .in_category(category)
        .map(|product| ProductCard {
            product_id: product.id_typed().clone(),
            name: product.name().to_string(),
            price: product.price(),
            price_label: money_label(currency, product.price()),
            quantity: cart.get_quantity(product.id_typed()),
        })
        .collect();

    ProductGrid { category, cards }
}

pub fn summary_bar(cart: &Cart, currency: &str) -> SummaryBar {
    let item_count = cart.total_item_count();
    let total = cart.total_value();
    SummaryBar {
        item_count,
        total,
        text: format!("🛒 {item_count} itens • {}", money_label(currency, total)),
        review_label: REVIEW_BUTTON_LABEL.to_string(),
    }
}

pub fn review_panel(cart: &Cart, config: &CheckoutConfig) -> ReviewPanel {
    let rows = cart
        .lines()
        .map(|line| ReviewRow {
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            quantity: line.quantity,
            line_total: line.line_total(),
            line_total_label: money_label(&config.currency, line.line_total()),
        })
        .collect();
    let total = cart.total_value();

    ReviewPanel {
        title: REVIEW_TITLE.to_string(),
        rows,
        total,
        total_text: format!("Total: {}", money_label(&config.currency, total)),
        checkout: CheckoutAction {
            label: CHECKOUT_LABEL.to_string(),
            url: checkout_link(cart, config),
        },
    }
}
