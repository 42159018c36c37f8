//! Top-level pages, one per route.

pub mod attacks;
pub mod leeches;
pub mod workspace_data;
pub mod workspace_host;
pub mod workspaces;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

/// Read a uuid route parameter. Falls back to the nil uuid while the route is
/// not fully resolved; requests with it return a backend error instead of
/// panicking.
pub(crate) fn uuid_param(name: &'static str) -> Signal<Uuid> {
    let params = use_params_map();
    Signal::derive(move || {
        params
            .read()
            .get(name)
            .and_then(|raw| Uuid::parse_str(&raw).ok())
            .unwrap_or_else(Uuid::nil)
    })
}
