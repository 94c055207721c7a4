use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde_json::Value as JsonValue;

use digimenu_core::ProductId;

use crate::error::CatalogError;
use crate::product::{Category, Product};

/// The active products available for the session, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Load the catalog file at `path`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&text)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let records: Vec<JsonValue> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let records: Vec<JsonValue> = serde_json::from_str(text)?;
        Ok(Self::from_records(records))
    }

    /// Build a catalog from already-decoded products, applying the same
    /// active-flag and duplicate-id filtering as file loading.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::default();
        for product in products {
            catalog.push(product);
        }
        catalog
    }

    fn from_records(records: Vec<JsonValue>) -> Self {
        let mut catalog = Self::default();
        for (position, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Product>(record) {
                Ok(product) => catalog.push(product),
                Err(e) => {
                    tracing::warn!(position, error = %e, "skipping malformed catalog record");
                }
            }
        }
        catalog
    }

    fn push(&mut self, product: Product) {
        if !product.is_active() {
            tracing::debug!(product_id = %product.id_typed(), "skipping inactive product");
            return;
        }
        if self.index.contains_key(product.id_typed()) {
            tracing::warn!(product_id = %product.id_typed(), "skipping duplicate product id");
            return;
        }
        self.index
            .insert(product.id_typed().clone(), self.products.len());
        self.products.push(product);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).and_then(|&i| self.products.get(i))
    }

    /// Products listed under `category`, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> + '_ {
        self.products
            .iter()
            .filter(move |p| p.category() == category)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digimenu_core::Money;

    const SAMPLE: &str = r#"[
        {"id": 1, "nome": "X-Burger", "preco": 18.0, "categoria": "lanches"},
        {"id": 2, "nome": "X-Salada", "preco": 20.0, "categoria": "lanches", "ativo": false},
        {"id": 3, "nome": "Pastel de Carne", "preco": 9.5, "categoria": "pasteis"},
        {"id": 4, "nome": "Coca-Cola Lata", "preco": 6.0, "categoria": "bebidas", "ativo": true},
        {"id": 5, "nome": "Suco de Laranja", "preco": 8.0, "categoria": "bebidas"}
    ]"#;

    #[test]
    fn filters_out_explicitly_inactive_products() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.get(&ProductId::new("2")).is_none());
        assert!(catalog.get(&ProductId::new("4")).is_some());
    }

    #[test]
    fn in_category_returns_only_matching_products_in_order() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let names: Vec<_> = catalog
            .in_category(Category::Bebidas)
            .map(|p| p.name())
            .collect();
        assert_eq!(names, vec!["Coca-Cola Lata", "Suco de Laranja"]);
        assert_eq!(catalog.in_category(Category::Sobremesas).count(), 0);
    }

    #[test]
    fn malformed_document_is_fatal() {
        let err = Catalog::from_json_str(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = Catalog::load_from_path("/nonexistent/digimenu/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn malformed_records_and_duplicates_are_skipped() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"id": 1, "name": "A", "price": 1, "category": "lanches"},
                {"id": 2, "name": "B", "price": -3, "category": "lanches"},
                {"id": 3, "name": "C", "price": 1, "category": "pizzas"},
                {"id": 1, "name": "A again", "price": 2, "category": "bebidas"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].name(), "A");
    }

    #[test]
    fn out_of_range_price_is_skipped_and_totals_stay_computable() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"id": 1, "name": "Huge", "price": "79228162514264337593543950335", "category": "lanches"},
                {"id": 2, "name": "Fine", "price": 12.5, "category": "lanches"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(&ProductId::new("1")).is_none());
        assert_eq!(catalog.products()[0].price(), Money::from_cents(1250));
    }

    #[test]
    fn from_reader_matches_from_str() {
        let a = Catalog::from_reader(SAMPLE.as_bytes()).unwrap();
        let b = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(a, b);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: exactly the active products survive, in their original order.
            #[test]
            fn keeps_exactly_the_active_products(flags in proptest::collection::vec(any::<bool>(), 0..30)) {
                let products: Vec<Product> = flags
                    .iter()
                    .enumerate()
                    .map(|(i, &active)| {
                        Product::new(
                            ProductId::new(i.to_string()),
                            format!("item {i}"),
                            Money::from_cents(100),
                            Category::ALL[i % Category::ALL.len()],
                        )
                        .with_active(active)
                    })
                    .collect();

                let catalog = Catalog::from_products(products.clone());
                let expected: Vec<&Product> = products.iter().filter(|p| p.is_active()).collect();
                let actual: Vec<&Product> = catalog.products().iter().collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }
}
