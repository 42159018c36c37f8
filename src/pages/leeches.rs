//! Leech management page (admin).

use leptos::prelude::*;

use crate::api;
use crate::api::ApiResult;
use crate::api::models::{CreateLeechRequest, SimpleLeech};

/// Lists registered leeches and offers registering or removing one.
#[component]
pub fn LeechesPage() -> impl IntoView {
    let leeches = LocalResource::new(|| api::leeches::all());

    let show_create = RwSignal::new(false);
    let on_create = move |_| show_create.set(true);
    let on_cancel = Callback::new(move |()| show_create.set(false));

    view! {
        <div class="leeches-page">
            <header class="leeches-page__header">
                <h1>"Leeches"</h1>
                <button class="button button--primary" on:click=on_create>
                    "+ Register Leech"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading leeches..."</p> }>
                {move || leeches.get().map(|result| leech_list(&result, leeches))}
            </Suspense>

            <Show when=move || show_create.get()>
                <CreateLeechDialog on_cancel=on_cancel leeches=leeches/>
            </Show>
        </div>
    }
}

fn leech_list(
    result: &ApiResult<Vec<SimpleLeech>>,
    leeches: LocalResource<ApiResult<Vec<SimpleLeech>>>,
) -> AnyView {
    match result {
        Ok(list) if list.is_empty() => {
            view! { <p class="leeches-page__empty">"No leeches registered."</p> }.into_any()
        }
        Ok(list) => view! {
            <div class="leeches-page__list">
                {list
                    .iter()
                    .map(|leech| {
                        let uuid = leech.uuid;
                        let remove = move |_| {
                            #[cfg(feature = "hydrate")]
                            leptos::task::spawn_local(async move {
                                match api::leeches::delete(uuid).await {
                                    Ok(()) => leeches.refetch(),
                                    Err(error) => {
                                        leptos::logging::warn!("leech removal failed: {error}");
                                    }
                                }
                            });
                            #[cfg(not(feature = "hydrate"))]
                            {
                                let _ = (uuid, leeches);
                            }
                        };
                        view! {
                            <div class="leech-row pane">
                                <span class="leech-row__name">{leech.name.clone()}</span>
                                <span class="leech-row__address">{leech.address.clone()}</span>
                                <span class="leech-row__description">
                                    {leech.description.clone().unwrap_or_default()}
                                </span>
                                <button class="button" on:click=remove>
                                    "Remove"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        Err(error) => view! { <p class="leeches-page__error">{error.to_string()}</p> }.into_any(),
    }
}

/// Modal dialog for registering a new leech.
#[component]
fn CreateLeechDialog(
    on_cancel: Callback<()>,
    leeches: LocalResource<ApiResult<Vec<SimpleLeech>>>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let leech_name = name.get_untracked();
        let leech_address = address.get_untracked();
        if leech_name.trim().is_empty() || leech_address.trim().is_empty() {
            return;
        }

        let request = CreateLeechRequest {
            name: leech_name.trim().to_owned(),
            address: leech_address.trim().to_owned(),
            description: Some(description.get_untracked())
                .filter(|description| !description.trim().is_empty()),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::leeches::create(&request).await {
                Ok(_) => {
                    leeches.refetch();
                    on_cancel.run(());
                }
                Err(error) => {
                    leptos::logging::warn!("leech registration failed: {error}");
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, leeches);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Register Leech"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Address"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="https://10.13.37.1:31337"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
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
                        "Register"
                    </button>
                </div>
            </div>
        </div>
    }
}
