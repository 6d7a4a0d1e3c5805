use crate::a11y::{STATUS_REGION_ID, visible_focus_css};
use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::ui::cart_panel::CartPanel;
use crate::components::ui::order_form::OrderFormPanel;
use crate::components::ui::product_card::ProductCard;
use crate::components::ui::success_banner::SuccessBanner;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let store = &*state.storefront;
    let config = store.config();
    let currency = AttrValue::from(config.currency.clone());

    let products = if state.catalog_ready() {
        html! {
            <section class="products" aria-label="Products">
                { for store.catalog().products().iter().map(|product| html! {
                    <ProductCard
                        key={product.id.clone()}
                        product={product.clone()}
                        currency={currency.clone()}
                        in_cart={store.cart().quantity_of(&product.id)}
                        on_add={handlers.add.clone()} />
                }) }
            </section>
        }
    } else {
        html! { <p class="error" role="alert">{ "Products are unavailable right now." }</p> }
    };

    html! {
        <>
            <style>{ visible_focus_css() }</style>
            <Header
                title={AttrValue::from(config.page.title.clone())}
                item_count={store.cart().item_count()}
                cart_open={store.is_cart_open()}
                on_toggle_cart={handlers.toggle_cart.clone()} />
            <main id="main" role="main">
                { if store.order_success() {
                    html! { <SuccessBanner on_dismiss={handlers.dismiss_success.clone()} /> }
                } else {
                    html! {}
                }}
                { products }
                <CartPanel
                    cart={store.cart().clone()}
                    currency={currency.clone()}
                    open={store.is_cart_open()}
                    on_quantity={handlers.quantity.clone()}
                    on_remove={handlers.remove.clone()}
                    on_close={handlers.close_cart.clone()} />
                <OrderFormPanel
                    form={store.form().clone()}
                    errors={store.errors().clone()}
                    on_input={handlers.input.clone()}
                    on_submit={handlers.submit.clone()} />
            </main>
            <div id={STATUS_REGION_ID} class="sr-only" aria-live="polite" aria-atomic="true"></div>
            <Footer support_email={AttrValue::from(config.support_email.clone())} />
        </>
    }
}
