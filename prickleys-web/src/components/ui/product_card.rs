//! Catalog tile with price, discount badge, features and the add button.
use crate::components::gradient_orb::GradientOrb;
use crate::data::{Product, format_amount};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Product,
    pub currency: AttrValue,
    /// Units of this product already in the cart
    #[prop_or_default]
    pub in_cart: u32,
    pub on_add: Callback<String>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;
    let heading_id = format!("product-{}", product.id);
    let colors = product.gradient.clone().map(AttrValue::from);
    let glow = AttrValue::from(product.glow_color().to_string());
    let price = format_amount(&props.currency, u64::from(product.price));
    let discount = product.discount_pct();

    let on_add = {
        let cb = props.on_add.clone();
        let id = product.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };

    html! {
        <article class="product-card" role="group" aria-labelledby={heading_id.clone()} data-product={product.id.clone()}>
            <GradientOrb colors={colors} glow={glow} />
            <h2 id={heading_id}>{ product.name.clone() }</h2>
            <p class="scent">{ product.scent.clone() }</p>
            <div class="price-row">
                <span class="price">{ price }</span>
                { if discount > 0 {
                    html! {
                        <>
                            <s class="original-price">{ format_amount(&props.currency, u64::from(product.original_price)) }</s>
                            <span class="discount-badge">{ format!("Save {discount}%") }</span>
                        </>
                    }
                } else {
                    html! {}
                }}
            </div>
            <ul class="features">
                { for product.features.iter().map(|feature| html! { <li>{ feature.clone() }</li> }) }
            </ul>
            <button type="button" class="add-to-cart" onclick={on_add}>
                { "Add to Cart" }
                { if props.in_cart > 0 {
                    html! { <span class="in-cart">{ format!(" ({} in cart)", props.in_cart) }</span> }
                } else {
                    html! {}
                }}
            </button>
        </article>
    }
}
