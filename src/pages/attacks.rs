//! Attack views — currently the TCP port-scan form.

use leptos::prelude::*;
use uuid::Uuid;

use crate::components::start_attack::StartAttack;
use crate::pages::uuid_param;
use crate::state::port_scan::PortScanTcpForm;

/// TCP port-scan form.
///
/// Submitting issues exactly one attack-creation request; retries and
/// backpressure of the scan itself are handled by the leech.
#[component]
pub fn WorkspaceAttacksPage() -> impl IntoView {
    let workspace = uuid_param("id");
    let form = RwSignal::new(PortScanTcpForm::default());
    let started = RwSignal::new(None::<Uuid>);
    let error = RwSignal::new(None::<String>);

    let on_start = Callback::new(move |()| {
        let request = form.with_untracked(|f| f.to_request(workspace.get_untracked()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::api::attacks::scan_tcp_ports(&request).await {
                Ok(uuid) => {
                    started.set(Some(uuid));
                    error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("scan_tcp_ports failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    });

    view! {
        <div class="attacks-page">
            <div class="attacks-page__form pane">
                <h2 class="heading">"TCP port scan"</h2>

                <label for="cidr">"IP / net in CIDR"</label>
                <input
                    id="cidr"
                    type="text"
                    prop:value=move || form.with(|f| f.target_input.clone())
                    on:input=move |ev| {
                        form.update(|f| f.target_input = event_target_value(&ev));
                    }
                />

                <label for="skip-icmp">"Skip ICMP check"</label>
                <input
                    id="skip-icmp"
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.skip_icmp_check)
                    on:change=move |_| {
                        form.update(|f| f.skip_icmp_check = !f.skip_icmp_check);
                    }
                />

                <button
                    class="attacks-page__advanced-toggle"
                    on:click=move |_| form.update(|f| f.show_advanced = !f.show_advanced)
                >
                    {move || {
                        if form.with(|f| f.show_advanced) { "Advanced -" } else { "Advanced +" }
                    }}
                </button>

                <div
                    class="attacks-page__advanced"
                    class=("attacks-page__advanced--open", move || form.with(|f| f.show_advanced))
                >
                    <label for="timeout">"Timeout (in ms)"</label>
                    <input
                        id="timeout"
                        type="text"
                        placeholder="timeout in ms"
                        prop:value=move || form.with(|f| f.timeout.to_string())
                        on:input=move |ev| {
                            form.update(|f| f.set_timeout(&event_target_value(&ev)));
                        }
                    />

                    <label for="retries">"Retries"</label>
                    <input
                        id="retries"
                        type="text"
                        placeholder="retries"
                        prop:value=move || form.with(|f| f.retries.to_string())
                        on:input=move |ev| {
                            form.update(|f| f.set_retries(&event_target_value(&ev)));
                        }
                    />

                    <label for="interval">"Interval (in ms)"</label>
                    <input
                        id="interval"
                        type="text"
                        placeholder="interval in ms"
                        prop:value=move || form.with(|f| f.interval.to_string())
                        on:input=move |ev| {
                            form.update(|f| f.set_interval(&event_target_value(&ev)));
                        }
                    />

                    <label for="task-limit">"Task limit"</label>
                    <input
                        id="task-limit"
                        type="text"
                        placeholder="task limit"
                        prop:value=move || form.with(|f| f.task_limit.to_string())
                        on:input=move |ev| {
                            form.update(|f| f.set_task_limit(&event_target_value(&ev)));
                        }
                    />
                </div>
            </div>

            <Show when=move || started.get().is_some()>
                <p class="attacks-page__started">
                    {move || format!("Attack started: {}", started.get().unwrap_or_default())}
                </p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="attacks-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <StartAttack
                active=Signal::derive(move || form.with(PortScanTcpForm::can_submit))
                on_click=on_start
            />
        </div>
    }
}
