//! Demo configuration loaded from the environment.

use anyhow::Context;

use shopfront_products::DEFAULT_EXPENSIVE_THRESHOLD;

pub const EXPENSIVE_THRESHOLD_ENV: &str = "SHOPFRONT_EXPENSIVE_THRESHOLD";
pub const DISCOUNT_ENV: &str = "SHOPFRONT_DEMO_DISCOUNT";

pub const DEFAULT_DISCOUNT_PERCENT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoConfig {
    /// Price above which a product is reported as expensive.
    pub expensive_threshold: f64,
    /// Percentage discount applied to the laptop.
    pub discount_percent: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            expensive_threshold: DEFAULT_EXPENSIVE_THRESHOLD,
            discount_percent: DEFAULT_DISCOUNT_PERCENT,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing keys fall back to defaults;
    /// present but unparsable values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            expensive_threshold: read_f64(&lookup, EXPENSIVE_THRESHOLD_ENV)?
                .unwrap_or(defaults.expensive_threshold),
            discount_percent: read_f64(&lookup, DISCOUNT_ENV)?
                .unwrap_or(defaults.discount_percent),
        })
    }
}

fn read_f64(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<f64>> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .with_context(|| format!("{key} must be a number, got {raw:?}"))
        })
        .transpose()
}
