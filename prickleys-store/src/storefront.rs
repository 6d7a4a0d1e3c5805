//! Storefront session state
//!
//! One `Storefront` holds everything a page view needs: the static catalog, the cart,
//! the order form with its last validation result, and the open/closed and success flags.
//! Every operation is a plain method so the UI layer can clone, mutate and replace it.
use crate::OrderDispatcher;
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::form::{FormErrors, FormField, OrderForm, validate_form};
use crate::order::MailtoLink;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Blocking warning shown when an order is placed with nothing in the cart.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty. Please add products before ordering.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    #[error("unknown product: {0}")]
    UnknownProduct(String),
}

/// Why an order was not placed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("order form has errors: {0}")]
    Invalid(FormErrors),
    #[error("Your cart is empty. Please add products before ordering.")]
    EmptyCart,
    #[error("could not open mail client: {0}")]
    Dispatch(String),
}

/// What was handed to the mail client for a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub link: MailtoLink,
    pub total: u64,
    pub lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storefront {
    catalog: Catalog,
    config: StorefrontConfig,
    cart: Cart,
    form: OrderForm,
    errors: FormErrors,
    cart_open: bool,
    order_success: bool,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(Catalog::default(), StorefrontConfig::default_config())
    }
}

impl Storefront {
    #[must_use]
    pub fn new(catalog: Catalog, config: StorefrontConfig) -> Self {
        Self {
            catalog,
            config,
            cart: Cart::new(),
            form: OrderForm::new(),
            errors: FormErrors::default(),
            cart_open: false,
            order_success: false,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn form(&self) -> &OrderForm {
        &self.form
    }

    /// Errors from the most recent validation pass.
    #[must_use]
    pub const fn errors(&self) -> &FormErrors {
        &self.errors
    }

    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    #[must_use]
    pub const fn order_success(&self) -> bool {
        self.order_success
    }

    /// Current cart total, always computed from the cart contents.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cart.total()
    }

    /// Add one unit of a catalog product and open the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not in the catalog.
    pub fn add_to_cart(&mut self, product_id: &str) -> Result<u32, StorefrontError> {
        let product = self
            .catalog
            .find(product_id)
            .ok_or_else(|| StorefrontError::UnknownProduct(product_id.to_string()))?;
        let quantity = self.cart.add_product(product);
        self.cart_open = true;
        self.order_success = false;
        log::debug!("added product {product_id}, quantity now {quantity}");
        Ok(quantity)
    }

    /// Set a cart quantity; values below 1 are ignored.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        self.cart.update_quantity(product_id, quantity)
    }

    pub fn remove_from_cart(&mut self, product_id: &str) -> bool {
        self.cart.remove(product_id).is_some()
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Recompute all field errors and report whether the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_form(&self.form);
        self.errors.is_empty()
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    pub fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
    }

    pub fn dismiss_success(&mut self) {
        self.order_success = false;
    }

    /// Validate, compose the order link, and hand it to the dispatcher.
    ///
    /// On dispatch the order is assumed sent: the cart and form are reset, the cart
    /// closes and the success flag is raised. Delivery itself is never confirmed.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] when any field fails validation,
    /// [`SubmitError::EmptyCart`] when there is nothing to order, and
    /// [`SubmitError::Dispatch`] when the mail client could not be opened.
    /// State other than the field errors is untouched in every error case.
    pub fn submit<D>(&mut self, dispatcher: &D) -> Result<OrderReceipt, SubmitError>
    where
        D: OrderDispatcher + ?Sized,
    {
        if !self.validate() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }
        if self.cart.is_empty() {
            log::warn!("order submitted with an empty cart");
            return Err(SubmitError::EmptyCart);
        }

        let link = MailtoLink::for_order(&self.config, &self.form, &self.cart);
        dispatcher
            .dispatch(&link)
            .map_err(|err| SubmitError::Dispatch(err.to_string()))?;

        let receipt = OrderReceipt {
            total: self.cart.total(),
            lines: self.cart.len(),
            link,
        };
        log::info!(
            "order dispatched: {} line(s), total {}",
            receipt.lines,
            receipt.total
        );

        self.order_success = true;
        self.cart.clear();
        self.form = OrderForm::new();
        self.cart_open = false;
        Ok(receipt)
    }
}
