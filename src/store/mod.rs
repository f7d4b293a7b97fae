//! The in-memory product store.
//!
//! A [`ProductStore`] is a cheap cloneable handle over a single shared,
//! lock-guarded sequence of products. All mutation goes through the write
//! lock, so ids stay unique and appends are atomic even on a multi-threaded
//! runtime. Reads hand out owned snapshots; callers never observe a mutation
//! mid-iteration.

pub mod types;

use std::sync::Arc;

use rust_decimal_macros::dec;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

pub use types::{Product, ProductDraft};

/// Shared handle to the authoritative product collection.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with the sample catalog.
    pub fn seeded() -> Self {
        let products = vec![
            Product {
                id: Uuid::new_v4().to_string(),
                name: "Laptop".to_string(),
                description: Some("High-performance laptop with 16GB RAM".to_string()),
                price: dec!(1200),
                category: "electronics".to_string(),
                in_stock: true,
            },
            Product {
                id: Uuid::new_v4().to_string(),
                name: "Smartphone".to_string(),
                description: Some("Latest model with 128GB storage".to_string()),
                price: dec!(800),
                category: "electronics".to_string(),
                in_stock: true,
            },
            Product {
                id: Uuid::new_v4().to_string(),
                name: "Coffee Maker".to_string(),
                description: Some("Programmable coffee maker with timer".to_string()),
                price: dec!(50),
                category: "kitchen".to_string(),
                in_stock: false,
            },
        ];

        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Snapshot of all products in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    /// Look up a product by id.
    pub async fn find_by_id(&self, id: &str) -> Option<Product> {
        self.products.read().await.iter().find(|p| p.id == id).cloned()
    }

    /// Assign a fresh id to the draft, append it, and return the stored record.
    pub async fn insert(&self, draft: ProductDraft) -> Product {
        let product = Product::from_draft(Uuid::new_v4().to_string(), draft);
        let mut products = self.products.write().await;
        products.push(product.clone());
        debug!(id = %product.id, name = %product.name, "product inserted");
        product
    }

    /// Replace the fields of the matching record, keeping its id.
    ///
    /// Returns the updated record, or `None` if no record matches.
    pub async fn update(&self, id: &str, draft: ProductDraft) -> Option<Product> {
        let mut products = self.products.write().await;
        let slot = products.iter_mut().find(|p| p.id == id)?;
        *slot = Product::from_draft(id.to_string(), draft);
        debug!(id, "product updated");
        Some(slot.clone())
    }

    /// Remove the matching record and return it, or `None` if absent.
    pub async fn remove_by_id(&self, id: &str) -> Option<Product> {
        let mut products = self.products.write().await;
        let index = products.iter().position(|p| p.id == id)?;
        let removed = products.remove(index);
        debug!(id, "product removed");
        Some(removed)
    }

    /// Number of live records.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(name: &str, category: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: None,
            price: dec!(10),
            category: category.to_string(),
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn seeded_store_holds_sample_catalog() {
        let store = ProductStore::seeded();
        assert_eq!(store.len().await, 3);

        let names: Vec<String> = store.list().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Laptop", "Smartphone", "Coffee Maker"]);
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids() {
        let store = ProductStore::new();
        let a = store.insert(draft("A", "misc")).await;
        let b = store.insert(draft("B", "misc")).await;
        let c = store.insert(draft("C", "misc")).await;

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn insert_appends_in_order() {
        let store = ProductStore::new();
        store.insert(draft("first", "misc")).await;
        store.insert(draft("second", "misc")).await;

        let names: Vec<String> = store.list().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn find_by_id_misses_unknown_id() {
        let store = ProductStore::seeded();
        assert!(store.find_by_id("no-such-id").await.is_none());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let store = ProductStore::new();
        let original = store.insert(draft("Kettle", "kitchen")).await;

        let updated = store
            .update(&original.id, ProductDraft {
                name: "Electric Kettle".to_string(),
                description: Some("1.7L".to_string()),
                price: dec!(35),
                category: "kitchen".to_string(),
                in_stock: false,
            })
            .await
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, "Electric Kettle");
        assert_eq!(updated.price, dec!(35));
        assert!(!updated.in_stock);
        assert_eq!(store.len().await, 1);

        let fetched = store.find_by_id(&original.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_misses_unknown_id() {
        let store = ProductStore::new();
        assert!(store.update("nope", draft("X", "misc")).await.is_none());
    }

    #[tokio::test]
    async fn remove_returns_record_and_shrinks_store() {
        let store = ProductStore::new();
        let product = store.insert(draft("Doomed", "misc")).await;

        let removed = store.remove_by_id(&product.id).await.unwrap();
        assert_eq!(removed, product);
        assert!(store.is_empty().await);

        // A second removal of the same id misses.
        assert!(store.remove_by_id(&product.id).await.is_none());
    }

    #[tokio::test]
    async fn snapshots_do_not_observe_later_mutation() {
        let store = ProductStore::new();
        store.insert(draft("only", "misc")).await;

        let snapshot = store.list().await;
        store.insert(draft("later", "misc")).await;

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len().await, 2);
    }
}
