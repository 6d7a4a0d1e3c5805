// Accessibility helpers

/// Id of the polite live region that carries cart and order announcements.
pub const STATUS_REGION_ID: &str = "store-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #9333ea;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Writes into the `#store-status` element if present.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// Announcement for a product added to the cart.
#[must_use]
pub fn added_message(product_name: &str, quantity: u32) -> String {
    if quantity == 1 {
        format!("{product_name} added to cart")
    } else {
        format!("{product_name} quantity is now {quantity}")
    }
}

/// Announcement for a product taken out of the cart.
#[must_use]
pub fn removed_message(product_name: &str) -> String {
    format!("{product_name} removed from cart")
}
