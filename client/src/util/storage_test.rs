#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_none_in_non_hydrate_tests() {
    assert_eq!(load("anything"), None);
}

#[test]
fn save_is_noop_but_callable() {
    save("anything", "value");
}

#[test]
fn catalog_layout_defaults_to_three_columns() {
    assert_eq!(read_catalog_layout(), CatalogLayout::ThreeColumns);
}

#[test]
fn toggle_catalog_layout_flips_value() {
    assert_eq!(toggle_catalog_layout(CatalogLayout::ThreeColumns), CatalogLayout::TwoColumns);
    assert_eq!(toggle_catalog_layout(CatalogLayout::TwoColumns), CatalogLayout::ThreeColumns);
}
