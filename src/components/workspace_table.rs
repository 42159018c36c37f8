//! Stateless shell for paginated workspace tables.
//!
//! Header and rows are supplied by the caller as children (with reactive
//! closures inside); this component contributes the pane chrome, the error
//! banner, and the pagination controls. Pairs with
//! [`TableHandle`](crate::state::table::TableHandle).

use leptos::prelude::*;

/// Pane wrapping a data table with pagination controls.
///
/// `on_page` receives the requested page index; clamping is the table
/// controller's job, so `>>` simply requests `max_page` and `>` requests
/// `page + 1`.
#[component]
pub fn WorkspaceTable(
    #[prop(into)] page: Signal<u64>,
    #[prop(into)] max_page: Signal<u64>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_page: Callback<u64>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="workspace-table pane">
            {children()}
            <Show when=move || error.get().is_some()>
                <div class="workspace-table__error">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
            <div class="workspace-table__controls">
                <button
                    class="workspace-table__button"
                    disabled=move || page.get() == 0
                    on:click=move |_| on_page.run(0)
                >
                    "<<"
                </button>
                <button
                    class="workspace-table__button"
                    disabled=move || page.get() == 0
                    on:click=move |_| on_page.run(page.get().saturating_sub(1))
                >
                    "<"
                </button>
                <span class="workspace-table__position">
                    {move || format!("{} / {}", page.get() + 1, max_page.get() + 1)}
                </span>
                <button
                    class="workspace-table__button"
                    disabled=move || page.get() >= max_page.get()
                    on:click=move |_| on_page.run(page.get() + 1)
                >
                    ">"
                </button>
                <button
                    class="workspace-table__button"
                    disabled=move || page.get() >= max_page.get()
                    on:click=move |_| on_page.run(max_page.get())
                >
                    ">>"
                </button>
                <Show when=move || loading.get()>
                    <span class="workspace-table__loading">"Loading..."</span>
                </Show>
            </div>
        </div>
    }
}
