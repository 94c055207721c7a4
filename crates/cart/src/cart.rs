use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use digimenu_catalog::Product;
use digimenu_core::{
    Aggregate, AggregateRoot, DomainError, DomainResult, Money, ProductId, SessionId,
};
use digimenu_events::Event;

/// Cart line: one aggregated entry per product.
///
/// `name` and `unit_price` are snapshots taken when the product was first
/// added; later catalog changes do not reach an existing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    /// Always >= 1 while the line exists.
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// Aggregate root: Cart.
///
/// Lines are kept in the order products were first added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: SessionId,
    lines: IndexMap<ProductId, CartLine>,
    version: u64,
}

impl Cart {
    /// Create the empty cart owned by a session.
    pub fn empty(id: SessionId) -> Self {
        Self {
            id,
            lines: IndexMap::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> SessionId {
        self.id
    }

    /// Current quantity of `product_id`, 0 when absent.
    pub fn get_quantity(&self, product_id: &ProductId) -> u32 {
        self.lines.get(product_id).map_or(0, |l| l.quantity)
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.get(product_id)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &CartLine> + '_ {
        self.lines.values()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_item_count(&self) -> u32 {
        self.lines.values().map(|l| l.quantity).sum()
    }

    pub fn total_value(&self) -> Money {
        self.lines.values().map(CartLine::line_total).sum()
    }

    /// Add one unit of `product`.
    pub fn add(&mut self, product: &Product) -> DomainResult<()> {
        self.execute(&CartCommand::AddItem(AddItem::from_product(product)))?;
        Ok(())
    }

    /// Remove one unit of the product; a no-op when it is not in the cart.
    pub fn remove(&mut self, product_id: &ProductId) -> DomainResult<()> {
        self.execute(&CartCommand::RemoveItem(RemoveItem {
            product_id: product_id.clone(),
        }))?;
        Ok(())
    }
}

impl AggregateRoot for Cart {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem (carries the snapshot to store if the line is new).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
}

impl AddItem {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id_typed().clone(),
            name: product.name().to_string(),
            unit_price: product.price(),
        }
    }

    /// Re-add using an existing line's snapshot.
    pub fn from_line(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            unit_price: line.unit_price,
        }
    }
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub product_id: ProductId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
}

/// Event: LineOpened (first unit of a product).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineOpened {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
}

/// Event: QuantityIncreased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityIncreased {
    pub product_id: ProductId,
    /// Quantity after the increase.
    pub quantity: u32,
}

/// Event: QuantityDecreased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityDecreased {
    pub product_id: ProductId,
    /// Quantity after the decrease (>= 1).
    pub quantity: u32,
}

/// Event: LineRemoved (last unit taken out).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRemoved {
    pub product_id: ProductId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    LineOpened(LineOpened),
    QuantityIncreased(QuantityIncreased),
    QuantityDecreased(QuantityDecreased),
    LineRemoved(LineRemoved),
}

impl CartEvent {
    pub fn product_id(&self) -> &ProductId {
        match self {
            CartEvent::LineOpened(e) => &e.product_id,
            CartEvent::QuantityIncreased(e) => &e.product_id,
            CartEvent::QuantityDecreased(e) => &e.product_id,
            CartEvent::LineRemoved(e) => &e.product_id,
        }
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::LineOpened(_) => "cart.line.opened",
            CartEvent::QuantityIncreased(_) => "cart.line.increased",
            CartEvent::QuantityDecreased(_) => "cart.line.decreased",
            CartEvent::LineRemoved(_) => "cart.line.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::LineOpened(e) => {
                self.lines.insert(
                    e.product_id.clone(),
                    CartLine {
                        product_id: e.product_id.clone(),
                        name: e.name.clone(),
                        unit_price: e.unit_price,
                        quantity: 1,
                    },
                );
            }
            CartEvent::QuantityIncreased(QuantityIncreased {
                product_id,
                quantity,
            })
            | CartEvent::QuantityDecreased(QuantityDecreased {
                product_id,
                quantity,
            }) => {
                if let Some(line) = self.lines.get_mut(product_id) {
                    line.quantity = *quantity;
                }
            }
            CartEvent::LineRemoved(e) => {
                self.lines.shift_remove(&e.product_id);
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddItem(cmd) => self.handle_add(cmd),
            CartCommand::RemoveItem(cmd) => Ok(self.handle_remove(cmd)),
        }
    }
}

impl Cart {
    fn handle_add(&self, cmd: &AddItem) -> Result<Vec<CartEvent>, DomainError> {
        // Keeps `total_item_count` (and so every line quantity) within u32.
        self.total_item_count()
            .checked_add(1)
            .ok_or_else(|| DomainError::invariant("cart item count overflow"))?;

        let Some(line) = self.lines.get(&cmd.product_id) else {
            return Ok(vec![CartEvent::LineOpened(LineOpened {
                product_id: cmd.product_id.clone(),
                name: cmd.name.clone(),
                unit_price: cmd.unit_price,
            })]);
        };

        let quantity = line
            .quantity
            .checked_add(1)
            .ok_or_else(|| DomainError::invariant("cart line quantity overflow"))?;

        Ok(vec![CartEvent::QuantityIncreased(QuantityIncreased {
            product_id: cmd.product_id.clone(),
            quantity,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> Vec<CartEvent> {
        match self.lines.get(&cmd.product_id) {
            None => Vec::new(),
            Some(line) if line.quantity <= 1 => vec![CartEvent::LineRemoved(LineRemoved {
                product_id: cmd.product_id.clone(),
            })],
            Some(line) => vec![CartEvent::QuantityDecreased(QuantityDecreased {
                product_id: cmd.product_id.clone(),
                quantity: line.quantity - 1,
            })],
        }
    }
}
