pub mod cart_panel;
pub mod order_form;
pub mod product_card;
pub mod success_banner;
