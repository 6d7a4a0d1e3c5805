#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::Renderer;

use prickleys_web::app::App;
use prickleys_web::data::PageMeta;
use prickleys_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    yew::platform::time::sleep(std::time::Duration::from_millis(20)).await;
}

fn click(selector: &str) {
    let doc = dom::document().expect("document");
    let el: HtmlElement = doc
        .query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} exists"))
        .dyn_into()
        .expect("html element");
    el.click();
}

#[wasm_bindgen_test]
async fn adding_a_product_opens_the_cart() {
    render_app().await;
    click("[data-product='1'] .add-to-cart");
    yew::platform::time::sleep(std::time::Duration::from_millis(20)).await;

    let doc = dom::document().expect("document");
    let panel = doc.get_element_by_id("cart-panel").expect("cart panel open");
    assert!(panel.text_content().unwrap_or_default().contains("Lemon Fresh"));
    let count = doc
        .query_selector(".cart-count")
        .expect("query")
        .expect("count badge");
    assert_eq!(count.text_content().unwrap_or_default(), "1");
}

#[wasm_bindgen_test]
async fn submitting_blank_form_shows_every_error() {
    render_app().await;
    click(".submit-order");
    yew::platform::time::sleep(std::time::Duration::from_millis(20)).await;

    let doc = dom::document().expect("document");
    let errors = doc.query_selector_all(".field-error").expect("query");
    assert_eq!(errors.length(), 4);
}

#[wasm_bindgen_test]
fn page_meta_is_applied_to_head() {
    dom::apply_page_meta(&PageMeta::default()).expect("apply meta");
    let doc = dom::document().expect("document");
    assert_eq!(doc.title(), "Prickleys Handwash Store");
    let viewport = doc
        .query_selector("meta[name='viewport']")
        .expect("query")
        .expect("viewport meta");
    assert_eq!(
        viewport.get_attribute("content").unwrap_or_default(),
        "width=device-width, initial-scale=1"
    );
}

#[wasm_bindgen_test]
async fn typing_updates_the_matching_field() {
    render_app().await;
    let doc = dom::document().expect("document");
    let input: HtmlInputElement = doc
        .query_selector("input[name='email']")
        .expect("query")
        .expect("email input")
        .dyn_into()
        .expect("input element");
    input.set_value("not-an-email");
    let event = web_sys::Event::new("input").expect("input event");
    input.dispatch_event(&event).expect("dispatch");
    yew::platform::time::sleep(std::time::Duration::from_millis(20)).await;

    click(".submit-order");
    yew::platform::time::sleep(std::time::Duration::from_millis(20)).await;
    let email_error = doc
        .get_element_by_id("order-email-error")
        .expect("email error shown");
    assert_eq!(email_error.text_content().unwrap_or_default(), "Invalid email");
}

#[wasm_bindgen_test]
fn console_logger_is_installed_once() {
    let _ = console_log::init_with_level(prickleys_web::log_level());
    assert!(console_log::init_with_level(prickleys_web::log_level()).is_err());
    assert_eq!(log::max_level(), prickleys_web::log_level().to_level_filter());
    dom::console_error("console logger check");
}
