//! Cart module (command-driven aggregate).
//!
//! This crate contains the in-memory cart for a kiosk session, implemented purely
//! as deterministic domain logic (no IO, no rendering, no persistence).

pub mod cart;

pub use cart::{
    AddItem, Cart, CartCommand, CartEvent, CartLine, LineOpened, LineRemoved, QuantityDecreased,
    QuantityIncreased, RemoveItem,
};
