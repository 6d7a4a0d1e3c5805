//! Slide-out cart listing with quantity controls and the running total.
use crate::data::{Cart, CartItem, format_amount};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CartPanelProps {
    pub cart: Cart,
    pub currency: AttrValue,
    pub open: bool,
    /// (product id, requested quantity)
    pub on_quantity: Callback<(String, i64)>,
    pub on_remove: Callback<String>,
    pub on_close: Callback<()>,
}

fn render_line(item: &CartItem, props: &CartPanelProps) -> Html {
    let id = item.id().to_string();
    let quantity = i64::from(item.quantity);

    let on_dec = {
        let cb = props.on_quantity.clone();
        let id = id.clone();
        Callback::from(move |_| cb.emit((id.clone(), quantity - 1)))
    };
    let on_inc = {
        let cb = props.on_quantity.clone();
        let id = id.clone();
        Callback::from(move |_| cb.emit((id.clone(), quantity + 1)))
    };
    let on_remove = {
        let cb = props.on_remove.clone();
        let id = id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };

    let name = item.product.name.clone();
    html! {
        <li class="cart-line" data-product={id}>
            <div class="cart-line-info">
                <span class="cart-line-name">{ name.clone() }</span>
                <span class="muted">{ item.product.scent.clone() }</span>
            </div>
            <div class="cart-qty-row">
                <button type="button" class="qty-btn" onclick={on_dec}
                    aria-label={format!("Decrease {name}")} disabled={item.quantity <= 1}>{ "−" }</button>
                <span class="cart-qty" aria-live="polite">{ item.quantity }</span>
                <button type="button" class="qty-btn" onclick={on_inc}
                    aria-label={format!("Increase {name}")}>{ "+" }</button>
            </div>
            <span class="cart-line-total">{ format_amount(&props.currency, item.line_total()) }</span>
            <button type="button" class="remove-btn" onclick={on_remove}
                aria-label={format!("Remove {name}")}>{ "Remove" }</button>
        </li>
    }
}

#[function_component(CartPanel)]
pub fn cart_panel(props: &CartPanelProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    html! {
        <aside id="cart-panel" class="cart-panel" role="region" aria-labelledby="cart-title" onkeydown={on_keydown}>
            <header class="section-header">
                <h2 id="cart-title">{ "Your Cart" }</h2>
                <button type="button" class="cart-close" aria-label="Close cart" onclick={on_close}>{ "×" }</button>
            </header>
            { if props.cart.is_empty() {
                html! { <p class="empty-cart">{ "Your cart is empty." }</p> }
            } else {
                html! {
                    <>
                        <ul class="cart-lines">
                            { for props.cart.items().iter().map(|item| render_line(item, props)) }
                        </ul>
                        <p class="cart-total" aria-live="polite">
                            { "Total: " }
                            <strong>{ format_amount(&props.currency, props.cart.total()) }</strong>
                        </p>
                    </>
                }
            }}
        </aside>
    }
}
