//! Workspace list page with a create-workspace dialog.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::api;
use crate::api::ApiResult;
use crate::api::models::SimpleWorkspace;

/// Landing page — lists the user's workspaces and offers creating one.
#[component]
pub fn WorkspacesPage() -> impl IntoView {
    let workspaces = LocalResource::new(|| api::workspaces::all());

    let show_create = RwSignal::new(false);
    let on_create = move |_| show_create.set(true);
    let on_cancel = Callback::new(move |()| show_create.set(false));

    view! {
        <div class="workspaces-page">
            <header class="workspaces-page__header">
                <h1>"Workspaces"</h1>
                <a class="workspaces-page__leeches" href="/leeches">"Leeches"</a>
                <button class="button button--primary" on:click=on_create>
                    "+ New Workspace"
                </button>
            </header>

            <div class="workspaces-page__grid">
                <Suspense fallback=move || view! { <p>"Loading workspaces..."</p> }>
                    {move || workspaces.get().map(|result| workspace_list(&result))}
                </Suspense>
            </div>

            <Show when=move || show_create.get()>
                <CreateWorkspaceDialog on_cancel=on_cancel/>
            </Show>
        </div>
    }
}

fn workspace_list(result: &ApiResult<Vec<SimpleWorkspace>>) -> AnyView {
    match result {
        Ok(list) if list.is_empty() => {
            view! { <p class="workspaces-page__empty">"No workspaces yet."</p> }.into_any()
        }
        Ok(list) => view! {
            <div class="workspaces-page__cards">
                {list
                    .iter()
                    .map(|workspace| {
                        let href = format!("/workspace/{}", workspace.uuid);
                        view! {
                            <a class="workspace-card" href=href>
                                <span class="workspace-card__name">{workspace.name.clone()}</span>
                                <span class="workspace-card__description">
                                    {workspace.description.clone().unwrap_or_default()}
                                </span>
                                <span class="workspace-card__owner">
                                    {workspace.owner.display_name.clone()}
                                </span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        Err(error) => {
            view! { <p class="workspaces-page__error">{error.to_string()}</p> }.into_any()
        }
    }
}

/// Modal dialog for creating a new workspace.
#[component]
fn CreateWorkspaceDialog(on_cancel: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = Callback::new(move |()| {
        let workspace_name = name.get_untracked();
        if workspace_name.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let workspace_name = workspace_name.trim().to_owned();
            let description = Some(description.get_untracked())
                .filter(|description| !description.trim().is_empty());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::workspaces::create(workspace_name, description).await {
                    Ok(uuid) => {
                        navigate(&format!("/workspace/{uuid}"), NavigateOptions::default());
                    }
                    Err(error) => {
                        leptos::logging::warn!("workspace creation failed: {error}");
                    }
                }
            });
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Workspace"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="button button--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
