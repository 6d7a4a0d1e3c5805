#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod data;
pub mod dom;

/// Console log level: debug builds log everything down to `debug`.
#[must_use]
pub const fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log_level()) {
        dom::console_error(&format!("Failed to install console logger: {err}"));
    }

    use data::StoreDataLoader;

    let meta = data::WebDataLoader
        .load_config()
        .map(|cfg| cfg.page)
        .unwrap_or_else(|err| {
            log::error!("Failed to load storefront config: {err}");
            data::PageMeta::default()
        });
    if let Err(err) = dom::apply_page_meta(&meta) {
        log::warn!("Could not apply page metadata: {}", dom::js_error_message(&err));
    }
    yew::Renderer::<app::App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        assert_eq!(log_level(), expected);
        assert!(log_level() >= log::Level::Info);
    }
}
