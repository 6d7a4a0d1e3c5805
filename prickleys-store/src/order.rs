//! Order email composition
//!
//! Orders leave the storefront as a `mailto:` link whose body is read by a person,
//! so the text layout here is the only wire format the store has.
use crate::cart::Cart;
use crate::config::StorefrontConfig;
use crate::form::OrderForm;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters `encodeURIComponent` escapes: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use as a URI query component.
#[must_use]
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Render an amount with its currency label, e.g. `Ksh 720`.
#[must_use]
pub fn format_amount(currency: &str, amount: u64) -> String {
    format!("{currency} {amount}")
}

/// Build the plain-text order summary.
#[must_use]
pub fn compose_order_body(form: &OrderForm, cart: &Cart, currency: &str) -> String {
    let mut lines = vec![
        format!("Order from: {}", form.name),
        format!("Email: {}", form.email),
        format!("Phone: {}", form.phone),
        format!("Address: {}", form.address),
        String::new(),
        "Order details:".to_string(),
    ];
    for item in cart.items() {
        lines.push(format!(
            "- {} ({}) x{} = {}",
            item.product.name,
            item.product.scent,
            item.quantity,
            format_amount(currency, item.line_total())
        ));
    }
    lines.push(String::new());
    lines.push(format!("Total: {}", format_amount(currency, cart.total())));
    lines.join("\n")
}

/// A pre-filled compose request for the visitor's mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailtoLink {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    /// Compose the order link for the current form and cart.
    #[must_use]
    pub fn for_order(config: &StorefrontConfig, form: &OrderForm, cart: &Cart) -> Self {
        Self {
            to: config.support_email.clone(),
            subject: config.subject.clone(),
            body: compose_order_body(form, cart, &config.currency),
        }
    }

    #[must_use]
    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mailto:{}?subject={}&body={}",
            self.to,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}
