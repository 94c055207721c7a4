use core::str::FromStr;

use serde::{Deserialize, Serialize};

use digimenu_core::{DomainError, Money, ProductId};

/// Menu section a product is listed under.
///
/// Declaration order is display order; the first variant is the default
/// selection when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Lanches,
    #[serde(alias = "pastéis")]
    Pasteis,
    Bebidas,
    Sobremesas,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Lanches,
        Category::Pasteis,
        Category::Bebidas,
        Category::Sobremesas,
    ];

    /// Stable key used in catalog files and shell input.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Lanches => "lanches",
            Category::Pasteis => "pasteis",
            Category::Bebidas => "bebidas",
            Category::Sobremesas => "sobremesas",
        }
    }

    /// Human-facing button label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Lanches => "Lanches",
            Category::Pasteis => "Pastéis",
            Category::Bebidas => "Bebidas",
            Category::Sobremesas => "Sobremesas",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.slug())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == wanted || c.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown category '{}' (expected one of: lanches, pasteis, bebidas, sobremesas)",
                    s.trim()
                ))
            })
    }
}

fn default_active() -> bool {
    true
}

/// A purchasable menu item. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    #[serde(alias = "nome")]
    name: String,
    #[serde(alias = "preco")]
    price: Money,
    #[serde(alias = "categoria")]
    category: Category,
    #[serde(alias = "ativo", default = "default_active")]
    active: bool,
}

impl Product {
    /// Build an active product.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
            active: true,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
