//! Prickleys Storefront Core
//!
//! Platform-agnostic storefront logic for the Prickleys handwash store: a fixed catalog,
//! a shopping cart, the order form with its validation rules, and composition of the
//! `mailto:` link that carries an order to the shop's inbox.
//! This crate has no UI or browser dependencies.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod form;
pub mod order;
pub mod storefront;

// Re-export commonly used types
pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, CatalogError, Product};
pub use config::{PageMeta, StorefrontConfig};
pub use form::{
    FieldError, FormErrors, FormField, OrderForm, UnknownField, is_valid_email, is_valid_phone,
    validate_form,
};
pub use order::{MailtoLink, compose_order_body, encode_component, format_amount};
pub use storefront::{
    EMPTY_CART_MESSAGE, OrderReceipt, Storefront, StorefrontError, SubmitError,
};

/// Trait for abstracting catalog and configuration loading
/// Platform-specific implementations should provide this
pub trait StoreDataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the product catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or is inconsistent.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load the storefront configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_config(&self) -> Result<StorefrontConfig, Self::Error>;
}

/// Hands a composed order to whatever opens the visitor's mail client.
///
/// Dispatch is fire-and-forget: `Ok` means the link was handed off, not that mail was sent.
pub trait OrderDispatcher {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Open the mail compose link
    ///
    /// # Errors
    ///
    /// Returns an error if the link could not be handed off at all.
    fn dispatch(&self, link: &MailtoLink) -> Result<(), Self::Error>;
}

/// Build a fresh storefront session from a loader.
///
/// # Errors
///
/// Returns an error if either the catalog or the configuration fails to load.
pub fn load_storefront<L>(loader: &L) -> anyhow::Result<Storefront>
where
    L: StoreDataLoader,
{
    let catalog = loader.load_catalog()?;
    let config = loader.load_config()?;
    log::debug!("loaded storefront with {} product(s)", catalog.len());
    Ok(Storefront::new(catalog, config))
}
