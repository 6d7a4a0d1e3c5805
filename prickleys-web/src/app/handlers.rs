use crate::a11y::{added_message, removed_message, set_status};
use crate::app::state::AppState;
use crate::data::{
    BrowserMailDispatcher, EMPTY_CART_MESSAGE, FormField, OrderDispatcher, Storefront,
    SubmitError,
};
use crate::dom;
use yew::prelude::*;

/// Browser side effect that follows a storefront transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    None,
    /// Polite screen-reader announcement
    Announce(String),
    /// Blocking alert
    Alert(String),
}

impl UiEffect {
    fn run(self) {
        match self {
            Self::None => {}
            Self::Announce(msg) => set_status(&msg),
            Self::Alert(msg) => dom::alert(&msg),
        }
    }
}

pub fn add_product(store: &Storefront, product_id: &str) -> (Storefront, UiEffect) {
    let mut next = store.clone();
    match next.add_to_cart(product_id) {
        Ok(quantity) => {
            let name = next
                .catalog()
                .find(product_id)
                .map_or_else(|| product_id.to_string(), |p| p.name.clone());
            (next, UiEffect::Announce(added_message(&name, quantity)))
        }
        Err(err) => {
            log::error!("add to cart failed: {err}");
            (next, UiEffect::None)
        }
    }
}

pub fn change_quantity(store: &Storefront, product_id: &str, quantity: i64) -> Option<Storefront> {
    let mut next = store.clone();
    next.update_quantity(product_id, quantity).then_some(next)
}

pub fn remove_product(store: &Storefront, product_id: &str) -> (Storefront, UiEffect) {
    let name = store
        .cart()
        .find(product_id)
        .map(|item| item.product.name.clone());
    let mut next = store.clone();
    if next.remove_from_cart(product_id) {
        let name = name.unwrap_or_else(|| product_id.to_string());
        (next, UiEffect::Announce(removed_message(&name)))
    } else {
        (next, UiEffect::None)
    }
}

/// Run the submission flow and decide which browser effect should follow.
pub fn submit_order<D>(store: &Storefront, dispatcher: &D) -> (Storefront, UiEffect)
where
    D: OrderDispatcher + ?Sized,
{
    let mut next = store.clone();
    let effect = match next.submit(dispatcher) {
        Ok(_) => UiEffect::Announce("Order sent to your email app".to_string()),
        Err(SubmitError::Invalid(errors)) => {
            log::debug!("order form rejected with {} error(s)", errors.len());
            UiEffect::Announce(format!(
                "Please fix {} field(s) before ordering",
                errors.len()
            ))
        }
        Err(SubmitError::EmptyCart) => UiEffect::Alert(EMPTY_CART_MESSAGE.to_string()),
        Err(err @ SubmitError::Dispatch(_)) => {
            log::error!("{err}");
            UiEffect::Alert("We could not open your email app. Please try again.".to_string())
        }
    };
    (next, effect)
}

#[derive(Clone)]
pub struct AppHandlers {
    pub add: Callback<String>,
    pub quantity: Callback<(String, i64)>,
    pub remove: Callback<String>,
    pub input: Callback<(FormField, String)>,
    pub submit: Callback<()>,
    pub toggle_cart: Callback<()>,
    pub close_cart: Callback<()>,
    pub dismiss_success: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            add: build_add(state),
            quantity: build_quantity(state),
            remove: build_remove(state),
            input: build_input(state),
            submit: build_submit(state),
            toggle_cart: build_flag(state, Storefront::toggle_cart),
            close_cart: build_flag(state, Storefront::close_cart),
            dismiss_success: build_flag(state, Storefront::dismiss_success),
        }
    }
}

fn build_add(state: &AppState) -> Callback<String> {
    let store = state.storefront.clone();
    Callback::from(move |id: String| {
        let (next, effect) = add_product(&store, &id);
        store.set(next);
        effect.run();
    })
}

fn build_quantity(state: &AppState) -> Callback<(String, i64)> {
    let store = state.storefront.clone();
    Callback::from(move |(id, quantity): (String, i64)| {
        if let Some(next) = change_quantity(&store, &id, quantity) {
            store.set(next);
        }
    })
}

fn build_remove(state: &AppState) -> Callback<String> {
    let store = state.storefront.clone();
    Callback::from(move |id: String| {
        let (next, effect) = remove_product(&store, &id);
        store.set(next);
        effect.run();
    })
}

fn build_input(state: &AppState) -> Callback<(FormField, String)> {
    let store = state.storefront.clone();
    Callback::from(move |(field, value): (FormField, String)| {
        let mut next = (*store).clone();
        next.set_field(field, value);
        store.set(next);
    })
}

fn build_submit(state: &AppState) -> Callback<()> {
    let store = state.storefront.clone();
    Callback::from(move |()| {
        let (next, effect) = submit_order(&store, &BrowserMailDispatcher);
        store.set(next);
        effect.run();
    })
}

fn build_flag(state: &AppState, apply: fn(&mut Storefront)) -> Callback<()> {
    let store = state.storefront.clone();
    Callback::from(move |()| {
        let mut next = (*store).clone();
        apply(&mut next);
        store.set(next);
    })
}
