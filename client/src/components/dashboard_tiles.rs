//! Navigation tiles shown at the top of both dashboards.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub label: &'static str,
    pub href: &'static str,
}

/// Tile row; the tile whose route is open is highlighted.
#[component]
pub fn DashboardTiles(tiles: &'static [Tile]) -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="dashboard-tiles">
            {tiles
                .iter()
                .map(|tile| {
                    let href = tile.href;
                    view! {
                        <a
                            class="dashboard-tiles__tile"
                            class:dashboard-tiles__tile--active=move || location.pathname.with(|p| p.starts_with(href))
                            href=href
                        >
                            {tile.label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
