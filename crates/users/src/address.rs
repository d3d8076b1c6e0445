//! Postal address value object.

use serde::{Deserialize, Serialize};

use shopfront_core::ValueObject;

pub const DEFAULT_COUNTRY: &str = "USA";

const US_COUNTRY_NAMES: [&str; 3] = ["USA", "US", "UNITED STATES"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ValueObject for Address {}

impl Address {
    /// Build an address in the default country.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// "street, city, state zip, country"
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip_code, self.country
        )
    }

    pub fn is_us_address(&self) -> bool {
        let country = self.country.to_uppercase();
        US_COUNTRY_NAMES.contains(&country.as_str())
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.full_address())
    }
}
