//! Product catalog
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A single product offered in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub scent: String,
    /// Current price in whole shillings
    pub price: u32,
    /// Pre-discount price in whole shillings
    pub original_price: u32,
    #[serde(default)]
    pub features: Vec<String>,
    /// Three CSS colours for the decorative orb
    pub gradient: [String; 3],
}

impl Product {
    /// Amount saved against the original price.
    #[must_use]
    pub const fn savings(&self) -> u32 {
        self.original_price.saturating_sub(self.price)
    }

    /// Discount as a whole percentage of the original price, rounded to nearest.
    #[must_use]
    pub fn discount_pct(&self) -> u32 {
        if self.original_price == 0 || self.price >= self.original_price {
            return 0;
        }
        let savings = u64::from(self.savings());
        let original = u64::from(self.original_price);
        let pct = (savings * 100 + original / 2) / original;
        u32::try_from(pct).unwrap_or(100)
    }

    /// Colour used for the orb glow.
    #[must_use]
    pub fn glow_color(&self) -> &str {
        &self.gradient[1]
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Parse(String),
    #[error("product with empty id")]
    EmptyId,
    #[error("duplicate product id: {0}")]
    DuplicateId(String),
    #[error("product {0} has no price")]
    ZeroPrice(String),
    #[error("product {0} is priced above its original price")]
    PriceAboveOriginal(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Static list of products, loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products, checking that it is well formed.
    ///
    /// # Errors
    ///
    /// Returns an error if any product fails [`Catalog::validate`].
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let catalog = Self { products };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the products are inconsistent.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check id uniqueness and pricing.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found, in catalog order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for product in &self.products {
            if product.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if product.price == 0 {
                return Err(CatalogError::ZeroPrice(product.id.clone()));
            }
            if product.original_price < product.price {
                return Err(CatalogError::PriceAboveOriginal(product.id.clone()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Catalog, Product};

    pub fn product(id: &str, name: &str, scent: &str, price: u32) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            scent: scent.to_string(),
            price,
            original_price: 300,
            features: vec!["Moisturizes Skin".to_string()],
            gradient: [
                "#c084fc".to_string(),
                "#a855f7".to_string(),
                "#9333ea".to_string(),
            ],
        }
    }

    pub fn handwash_catalog() -> Catalog {
        Catalog::new(vec![
            product("1", "Lemon Fresh", "Lemon Scented", 240),
            product("2", "Red Fruit Burst", "Red Fruit Scented", 240),
            product("3", "Lavender Breeze", "Lavender Scented", 240),
        ])
        .unwrap()
    }
}
