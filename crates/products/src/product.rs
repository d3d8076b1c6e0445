use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfront_core::EntityId;

/// Price above which a product counts as expensive when no threshold is given.
pub const DEFAULT_EXPENSIVE_THRESHOLD: f64 = 100.0;

/// Catalog item.
///
/// Not an [`shopfront_core::Entity`]: a product only receives an id when a
/// [`crate::ProductCatalog`] takes it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    product_id: Option<EntityId>,
    name: String,
    description: Option<String>,
    price: f64,
    category: String,
    is_available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            product_id: None,
            name: name.into(),
            description: None,
            price,
            category: category.into(),
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn product_id(&self) -> Option<EntityId> {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// True when a description is set and is not blank.
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Price after a `percent` discount. The percentage is not range-checked.
    pub fn discounted_price(&self, percent: f64) -> f64 {
        self.price * (1.0 - percent / 100.0)
    }

    /// Replace the price with its discounted value. Repeated calls compound.
    pub fn apply_discount(&mut self, percent: f64) {
        self.price = self.discounted_price(percent);
        self.touch();
    }

    /// Price with two decimals and a leading `$`.
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Strictly above [`DEFAULT_EXPENSIVE_THRESHOLD`].
    pub fn is_expensive(&self) -> bool {
        self.is_expensive_above(DEFAULT_EXPENSIVE_THRESHOLD)
    }

    pub fn is_expensive_above(&self, threshold: f64) -> bool {
        self.price > threshold
    }

    pub fn mark_unavailable(&mut self) {
        self.is_available = false;
        self.touch();
    }

    pub fn mark_available(&mut self) {
        self.is_available = true;
        self.touch();
    }

    /// Category with its first character uppercased.
    pub fn category_display_name(&self) -> String {
        let mut chars = self.category.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// "{name} - {price} ({Category})"
    pub fn summary(&self) -> String {
        format!(
            "{} - {} ({})",
            self.name,
            self.formatted_price(),
            self.category_display_name()
        )
    }

    pub(crate) fn assign_id(&mut self, id: EntityId) {
        self.product_id = Some(id);
    }

    pub(crate) fn set_price(&mut self, price: f64) {
        self.price = price;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.name, self.formatted_price())
    }
}
