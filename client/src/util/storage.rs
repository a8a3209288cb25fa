//! Browser `localStorage` access for persisted UI preferences.
//!
//! Persistence is best-effort and browser-only; SSR paths no-op so server
//! rendering always starts from defaults.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::ui::CatalogLayout;

#[cfg(feature = "hydrate")]
const CATALOG_LAYOUT_KEY: &str = "pulse_portal_catalog_layout";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a raw string value for `key`.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string value for `key`.
pub fn save(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Stored catalog layout, or the default three-column grid.
pub fn read_catalog_layout() -> CatalogLayout {
    #[cfg(feature = "hydrate")]
    {
        load(CATALOG_LAYOUT_KEY).map_or_else(CatalogLayout::default, |raw| CatalogLayout::from_stored(&raw))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        CatalogLayout::default()
    }
}

/// Flip the catalog layout and persist the new choice.
pub fn toggle_catalog_layout(current: CatalogLayout) -> CatalogLayout {
    let next = current.toggled();
    #[cfg(feature = "hydrate")]
    save(CATALOG_LAYOUT_KEY, next.as_stored());
    next
}
