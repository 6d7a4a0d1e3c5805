//! Site banner with the skip link and the cart toggle.
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub item_count: u64,
    pub cart_open: bool,
    pub on_toggle_cart: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_toggle = {
        let cb = p.on_toggle_cart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let cart_label = if p.item_count == 1 {
        "Cart, 1 item".to_string()
    } else {
        format!("Cart, {} items", p.item_count)
    };
    html! {
        <header role="banner" class="store-header">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <h1>{ p.title.clone() }</h1>
            <p class="tagline">{ "Clean hands, delightful fragrances." }</p>
            <button
                id="cart-toggle"
                type="button"
                class={classes!("cart-toggle", p.cart_open.then_some("open"))}
                aria-expanded={p.cart_open.to_string()}
                aria-controls="cart-panel"
                aria-label={cart_label}
                onclick={on_toggle}>
                <span aria-hidden="true">{ "🛒" }</span>
                <span class="cart-count">{ p.item_count }</span>
            </button>
        </header>
    }
}
