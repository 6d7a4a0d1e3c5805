pub mod handlers;
pub mod state;
pub mod view;

use yew::prelude::*;

/// Top-level storefront component mounted to the DOM.
#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    view::render_app(&app_state)
}

#[cfg(test)]
mod tests {
    use super::App;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn app_renders_catalog_and_empty_form() {
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(html.contains("Prickleys Handwash Store"));
        assert!(html.contains("Lemon Fresh"));
        assert!(html.contains("Red Fruit Burst"));
        assert!(html.contains("Lavender Breeze"));
        assert!(html.contains("Order via Email"));
        assert!(!html.contains("id=\"cart-panel\""));
        assert!(!html.contains("field-error"));
    }
}
