use crate::data::{Storefront, initial_storefront};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub storefront: UseStateHandle<Storefront>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        storefront: use_state(initial_storefront),
    }
}

impl AppState {
    #[must_use]
    pub fn catalog_ready(&self) -> bool {
        !self.storefront.catalog().is_empty()
    }
}
