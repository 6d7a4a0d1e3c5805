//! Web-specific storefront data
//!
//! This module provides the browser implementations of the prickleys-store traits
//! and re-exports the core storefront types.

use wasm_bindgen::JsValue;

// Re-export all types from prickleys-store
pub use prickleys_store::*;

const CATALOG_JSON: &str = include_str!("../static/assets/data/catalog.json");
const STOREFRONT_JSON: &str = include_str!("../static/assets/data/storefront.json");

/// Web-specific data loader reading the catalog and configuration embedded at build time
pub struct WebDataLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreDataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::from_json(CATALOG_JSON)?)
    }

    fn load_config(&self) -> Result<StorefrontConfig, Self::Error> {
        Ok(StorefrontConfig::from_json(STOREFRONT_JSON)?)
    }
}

/// Build the initial storefront for a page view.
///
/// Falls back to an empty catalog with default configuration if the embedded data is broken,
/// so the page still renders.
#[must_use]
pub fn initial_storefront() -> Storefront {
    load_storefront(&WebDataLoader).unwrap_or_else(|err| {
        log::error!("Failed to load storefront data: {err:#}");
        Storefront::default()
    })
}

/// Opens order links in the visitor's mail client by navigating the window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserMailDispatcher;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("navigation failed: {0}")]
    Navigation(String),
}

impl From<JsValue> for DispatchError {
    fn from(value: JsValue) -> Self {
        Self::Navigation(crate::dom::js_error_message(&value))
    }
}

impl OrderDispatcher for BrowserMailDispatcher {
    type Error = DispatchError;

    fn dispatch(&self, link: &MailtoLink) -> Result<(), Self::Error> {
        crate::dom::navigate_to(&link.href())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_data_loads() {
        let store = initial_storefront();
        assert_eq!(store.catalog().len(), 3);
        assert_eq!(store.config().currency, "Ksh");
    }

    #[test]
    fn loader_reads_config() {
        let cfg = WebDataLoader.load_config().unwrap();
        assert_eq!(cfg.page.title, "Prickleys Handwash Store");
    }
}
