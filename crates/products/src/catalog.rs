//! In-memory product catalog.

use std::collections::BTreeMap;

use serde::Serialize;

use shopfront_core::EntityId;

use crate::product::Product;

/// Owns products in insertion order and hands out their identifiers.
///
/// Identifiers start at 1 and are never reused after removal.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
    next_id: EntityId,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: EntityId::FIRST,
        }
    }

    pub fn add_product(&mut self, mut product: Product) -> EntityId {
        let id = self.next_id;
        product.assign_id(id);
        self.next_id = id.next();
        tracing::debug!(product_id = %id, category = product.category(), "product added");
        self.products.push(product);
        id
    }

    pub fn get_product(&self, id: EntityId) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id() == Some(id))
    }

    pub fn get_product_mut(&mut self, id: EntityId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.product_id() == Some(id))
    }

    /// Snapshot of every product; changes to it do not reach the catalog.
    pub fn all_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn available_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_available()).collect()
    }

    pub fn products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category() == category)
            .collect()
    }

    pub fn remove_product(&mut self, id: EntityId) -> bool {
        let Some(pos) = self.products.iter().position(|p| p.product_id() == Some(id)) else {
            return false;
        };
        self.products.remove(pos);
        tracing::debug!(product_id = %id, "product removed");
        true
    }

    pub fn update_price(&mut self, id: EntityId, price: f64) -> bool {
        match self.get_product_mut(id) {
            Some(product) => {
                product.set_price(price);
                tracing::debug!(product_id = %id, price, "product price updated");
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring match on the product name or description.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.to_lowercase();
        let matches = |text: &str| text.to_lowercase().contains(&query);
        self.products
            .iter()
            .filter(|p| matches(p.name()) || p.description().is_some_and(|d| matches(d)))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// Mean price, or 0.0 for an empty catalog.
    pub fn average_price(&self) -> f64 {
        if self.products.is_empty() {
            return 0.0;
        }
        let total: f64 = self.products.iter().map(Product::price).sum();
        total / self.products.len() as f64
    }

    /// Highest price; ties go to the earliest inserted product.
    pub fn most_expensive(&self) -> Option<&Product> {
        self.products
            .iter()
            .reduce(|best, p| if p.price() > best.price() { p } else { best })
    }

    /// Lowest price; ties go to the earliest inserted product.
    pub fn cheapest(&self) -> Option<&Product> {
        self.products
            .iter()
            .reduce(|best, p| if p.price() < best.price() { p } else { best })
    }

    pub fn stats(&self) -> CatalogStats {
        let mut by_category = BTreeMap::new();
        for product in &self.products {
            *by_category.entry(product.category().to_string()).or_insert(0) += 1;
        }
        CatalogStats {
            total: self.count(),
            available: self.products.iter().filter(|p| p.is_available()).count(),
            average_price: self.average_price(),
            by_category,
        }
    }
}

/// Counts reported by [`ProductCatalog::stats`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub available: usize,
    pub average_price: f64,
    pub by_category: BTreeMap<String, usize>,
}

impl core::fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Total products: {}", self.total)?;
        writeln!(f, "Available products: {}", self.available)?;
        writeln!(f, "Average price: ${:.2}", self.average_price)?;
        for (category, count) in &self.by_category {
            writeln!(f, "{category} products: {count}")?;
        }
        Ok(())
    }
}
