//! Session state and the single state-update function.
//!
//! ```text
//! UiCommand ──update()──▶ MenuSession (cart, selected category, review flag)
//!                               │
//!                         Redraw flags
//!                               ▼
//!                       view() / regions ──▶ front-end
//! ```

use digimenu_cart::{AddItem, Cart, CartCommand, RemoveItem};
use digimenu_catalog::{Catalog, Category};
use digimenu_checkout::{CheckoutConfig, checkout_link};
use digimenu_core::{Aggregate, DomainError, DomainResult, ProductId, SessionId};
use digimenu_events::Event;

use crate::view::{self, MenuView, PAGE_TITLE, ProductGrid, ReviewPanel, SummaryBar};

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    SelectCategory(Category),
    /// One more unit (from a product card or a review row).
    Add(ProductId),
    /// One unit less (from a product card or a review row).
    Remove(ProductId),
    OpenReview,
    CloseReview,
}

/// Regions a front-end must re-render after a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Redraw {
    pub categories: bool,
    pub grid: bool,
    pub summary: bool,
    pub review: bool,
}

/// Everything one kiosk session knows. Owned by the front-end; there is no
/// ambient state.
#[derive(Debug, Clone)]
pub struct MenuSession {
    id: SessionId,
    catalog: Catalog,
    cart: Cart,
    selected: Category,
    review_open: bool,
    checkout: CheckoutConfig,
}

impl MenuSession {
    /// Start a session: empty cart, default category selected, review closed.
    pub fn new(catalog: Catalog, checkout: CheckoutConfig) -> Self {
        Self::with_id(SessionId::new(), catalog, checkout)
    }

    pub fn with_id(id: SessionId, catalog: Catalog, checkout: CheckoutConfig) -> Self {
        tracing::info!(
            session_id = %id,
            products = catalog.len(),
            "menu session started"
        );
        Self {
            id,
            catalog,
            cart: Cart::empty(id),
            selected: Category::default(),
            review_open: false,
            checkout,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn selected_category(&self) -> Category {
        self.selected
    }

    pub fn is_review_open(&self) -> bool {
        self.review_open
    }

    pub fn checkout_config(&self) -> &CheckoutConfig {
        &self.checkout
    }

    /// Apply one command and report which regions changed.
    ///
    /// A rejected command leaves the session untouched.
    pub fn update(&mut self, command: UiCommand) -> DomainResult<Redraw> {
        tracing::debug!(session_id = %self.id, ?command, "ui command");

        match command {
            UiCommand::SelectCategory(category) => {
                self.selected = category;
                Ok(Redraw {
                    categories: true,
                    grid: true,
                    ..Redraw::default()
                })
            }
            UiCommand::Add(product_id) => {
                let item = self.add_item_for(&product_id)?;
                self.dispatch(CartCommand::AddItem(item))?;
                Ok(self.cart_changed())
            }
            UiCommand::Remove(product_id) => {
                self.dispatch(CartCommand::RemoveItem(RemoveItem { product_id }))?;
                Ok(self.cart_changed())
            }
            UiCommand::OpenReview => {
                self.review_open = true;
                Ok(Redraw {
                    review: true,
                    ..Redraw::default()
                })
            }
            UiCommand::CloseReview => {
                self.review_open = false;
                Ok(Redraw {
                    review: true,
                    ..Redraw::default()
                })
            }
        }
    }

    /// Snapshot to add: the catalog entry, or the cart line's own snapshot for
    /// products no longer listed.
    fn add_item_for(&self, product_id: &ProductId) -> DomainResult<AddItem> {
        if let Some(product) = self.catalog.get(product_id) {
            return Ok(AddItem::from_product(product));
        }
        self.cart
            .line(product_id)
            .map(AddItem::from_line)
            .ok_or_else(DomainError::not_found)
    }

    fn dispatch(&mut self, command: CartCommand) -> DomainResult<()> {
        let events = self.cart.execute(&command)?;
        for event in &events {
            tracing::debug!(
                session_id = %self.id,
                event = event.event_type(),
                product_id = %event.product_id(),
                "cart changed"
            );
        }
        Ok(())
    }

    fn cart_changed(&self) -> Redraw {
        Redraw {
            grid: true,
            summary: true,
            review: self.review_open,
            ..Redraw::default()
        }
    }

    /// The checkout deep link for the current cart.
    pub fn checkout_link(&self) -> String {
        tracing::info!(
            session_id = %self.id,
            items = self.cart.total_item_count(),
            total = %self.cart.total_value(),
            "checkout link generated"
        );
        checkout_link(&self.cart, &self.checkout)
    }

    pub fn grid(&self) -> ProductGrid {
        view::product_grid(&self.catalog, &self.cart, self.selected, &self.checkout.currency)
    }

    pub fn summary(&self) -> SummaryBar {
        view::summary_bar(&self.cart, &self.checkout.currency)
    }

    /// The review panel contents, or `None` while it is closed.
    pub fn review(&self) -> Option<ReviewPanel> {
        self.review_open
            .then(|| view::review_panel(&self.cart, &self.checkout))
    }

    pub fn view(&self) -> MenuView {
        MenuView {
            title: PAGE_TITLE.to_string(),
            categories: view::category_tabs(self.selected),
            grid: self.grid(),
            summary: self.summary(),
            review: self.review(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digimenu_catalog::Product;
    use digimenu_core::Money;

    fn test_catalog() -> Catalog {
        Catalog::from_products([
            Product::new(ProductId::new("1"), "X-Burger", Money::from_cents(1000), Category::Lanches),
            Product::new(ProductId::new("2"), "Pastel", Money::from_cents(550), Category::Pasteis),
            Product::new(ProductId::new("3"), "Suco", Money::from_cents(800), Category::Bebidas),
            Product::new(ProductId::new("4"), "Coca", Money::from_cents(600), Category::Bebidas),
        ])
    }

    fn test_session() -> MenuSession {
        MenuSession::new(test_catalog(), CheckoutConfig::default())
    }

    #[test]
    fn starts_on_default_category_with_empty_cart() {
        let session = test_session();
        assert_eq!(session.selected_category(), Category::Lanches);
        assert!(!session.is_review_open());

        let view = session.view();
        assert_eq!(view.summary.item_count, 0);
        assert_eq!(view.summary.text, "🛒 0 itens • R$ 0.00");
        assert_eq!(view.grid.cards.len(), 1);
        assert!(view.review.is_none());
        assert!(view.categories[0].selected);
    }

    #[test]
    fn select_category_filters_grid() {
        let mut session = test_session();
        let redraw = session
            .update(UiCommand::SelectCategory(Category::Bebidas))
            .unwrap();
        assert!(redraw.grid && redraw.categories);
        assert!(!redraw.summary);

        let grid = session.grid();
        assert_eq!(grid.category, Category::Bebidas);
        assert_eq!(grid.cards.len(), 2);
        assert!(grid.cards.iter().all(|c| c.name == "Suco" || c.name == "Coca"));
    }

    #[test]
    fn empty_category_renders_empty_grid() {
        let mut session = test_session();
        session
            .update(UiCommand::SelectCategory(Category::Sobremesas))
            .unwrap();
        assert!(session.grid().cards.is_empty());
    }

    #[test]
    fn add_updates_card_quantity_and_summary() {
        let mut session = test_session();
        let redraw = session.update(UiCommand::Add(ProductId::new("1"))).unwrap();
        session.update(UiCommand::Add(ProductId::new("1"))).unwrap();

        assert!(redraw.grid && redraw.summary);
        assert!(!redraw.review);
        assert_eq!(session.grid().cards[0].quantity, 2);
        assert_eq!(session.summary().text, "🛒 2 itens • R$ 20.00");
    }

    #[test]
    fn add_of_unknown_product_is_rejected_without_side_effects() {
        let mut session = test_session();
        let err = session
            .update(UiCommand::Add(ProductId::new("404")))
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn remove_of_product_not_in_cart_is_a_noop() {
        let mut session = test_session();
        session.update(UiCommand::Add(ProductId::new("2"))).unwrap();
        let version_before = digimenu_core::AggregateRoot::version(session.cart());

        session.update(UiCommand::Remove(ProductId::new("1"))).unwrap();
        session.update(UiCommand::Remove(ProductId::new("404"))).unwrap();

        assert_eq!(digimenu_core::AggregateRoot::version(session.cart()), version_before);
        assert_eq!(session.cart().total_item_count(), 1);
    }

    #[test]
    fn review_panel_redraws_while_open() {
        let mut session = test_session();
        session.update(UiCommand::Add(ProductId::new("1"))).unwrap();
        session.update(UiCommand::OpenReview).unwrap();

        let redraw = session.update(UiCommand::Add(ProductId::new("2"))).unwrap();
        assert!(redraw.review);

        let panel = session.review().unwrap();
        assert_eq!(panel.title, "🧾 Revisar pedido");
        assert_eq!(panel.rows.len(), 2);
        assert_eq!(panel.total_text, "Total: R$ 15.50");
        assert!(panel.checkout.url.starts_with("https://wa.me/5511957695751?text="));

        session.update(UiCommand::CloseReview).unwrap();
        assert!(session.review().is_none());
        let redraw = session.update(UiCommand::Add(ProductId::new("2"))).unwrap();
        assert!(!redraw.review);
    }

    #[test]
    fn review_row_controls_act_on_the_same_line() {
        let mut session = test_session();
        session.update(UiCommand::Add(ProductId::new("3"))).unwrap();
        session.update(UiCommand::OpenReview).unwrap();

        let row_id = session.review().unwrap().rows[0].product_id.clone();
        session.update(UiCommand::Add(row_id.clone())).unwrap();
        assert_eq!(session.review().unwrap().rows[0].quantity, 2);

        session.update(UiCommand::Remove(row_id.clone())).unwrap();
        session.update(UiCommand::Remove(row_id)).unwrap();
        assert!(session.review().unwrap().rows.is_empty());
        assert_eq!(session.review().unwrap().total_text, "Total: R$ 0.00");
    }
}
