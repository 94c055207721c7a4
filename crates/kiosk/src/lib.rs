//! `digimenu-kiosk`
//!
//! **Responsibility:** the view controller of the digital menu.
//!
//! This crate provides:
//! - `MenuSession`: the explicit session state (catalog, cart, selected category,
//!   review panel) and its single state-update function
//! - render-only view models for every UI region
//! - a line-oriented terminal shell that drives a session from stdin

pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod shell;
pub mod view;

pub use config::KioskConfig;
pub use error::KioskError;
pub use session::{MenuSession, Redraw, UiCommand};
pub use view::MenuView;
