use prickleys_store::{Catalog, StorefrontConfig};

const CATALOG_JSON: &str = include_str!("../../prickleys-web/static/assets/data/catalog.json");
const STOREFRONT_JSON: &str =
    include_str!("../../prickleys-web/static/assets/data/storefront.json");

#[test]
fn shipped_catalog_has_three_discounted_handwashes() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let names: Vec<_> = catalog.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Lemon Fresh", "Red Fruit Burst", "Lavender Breeze"]);
    for product in catalog.products() {
        assert_eq!(product.price, 240);
        assert_eq!(product.original_price, 300);
        assert_eq!(product.discount_pct(), 20);
        assert_eq!(product.features.len(), 3);
        assert!(product.gradient.iter().all(|c| c.starts_with('#')));
    }
}

#[test]
fn shipped_config_matches_defaults() {
    let cfg = StorefrontConfig::from_json(STOREFRONT_JSON).unwrap();
    assert_eq!(cfg, StorefrontConfig::default_config());
}
