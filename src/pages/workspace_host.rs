//! Host detail view — ports and domains of a single host.

use leptos::prelude::*;

use crate::api;
use crate::components::workspace_table::WorkspaceTable;
use crate::pages::uuid_param;
use crate::state::table::use_table;

/// One host of a workspace with its ports and domains, both paginated and
/// filtered by the host's uuid on the backend.
#[component]
pub fn WorkspaceHostPage() -> impl IntoView {
    let workspace = uuid_param("id");
    let host = uuid_param("host");

    let detail = LocalResource::new(move || {
        api::workspaces::get_host(workspace.get(), host.get())
    });

    let ports = use_table(
        move |limit, offset| {
            api::workspaces::ports(
                workspace.get_untracked(),
                limit,
                offset,
                Some(host.get_untracked()),
            )
        },
        move || (workspace.get(), host.get()),
    );
    let domains = use_table(
        move |limit, offset| {
            api::workspaces::domains(
                workspace.get_untracked(),
                limit,
                offset,
                Some(host.get_untracked()),
            )
        },
        move || (workspace.get(), host.get()),
    );

    view! {
        <div class="workspace-host-page">
            <header class="workspace-host-page__header pane">
                <Suspense fallback=move || view! { <h1>"Loading host..."</h1> }>
                    {move || {
                        detail
                            .get()
                            .map(|result| match result {
                                Ok(host) => view! {
                                    <div class="workspace-host-page__summary">
                                        <h1>{host.ip_addr}</h1>
                                        <span>{format!("{:?}", host.os_type)}</span>
                                        <span>{host.comment}</span>
                                    </div>
                                }
                                .into_any(),
                                Err(error) => view! {
                                    <h1 class="workspace-host-page__error">{error.to_string()}</h1>
                                }
                                .into_any(),
                            })
                    }}
                </Suspense>
            </header>

            <div class="workspace-host-page__tables">
                <WorkspaceTable
                    page=ports.page()
                    max_page=ports.max_page()
                    loading=ports.loading()
                    error=ports.error()
                    on_page=Callback::new(move |page| ports.set_page(page))
                >
                    <div class="workspace-data-table-header">
                        <span>"Port"</span>
                        <span>"Comment"</span>
                    </div>
                    {move || {
                        ports
                            .items()
                            .into_iter()
                            .map(|port| {
                                view! {
                                    <div class="workspace-data-table-row">
                                        <span>{port.port}</span>
                                        <span>{port.comment}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </WorkspaceTable>

                <WorkspaceTable
                    page=domains.page()
                    max_page=domains.max_page()
                    loading=domains.loading()
                    error=domains.error()
                    on_page=Callback::new(move |page| domains.set_page(page))
                >
                    <div class="workspace-data-table-header">
                        <span>"Name"</span>
                        <span>"Comment"</span>
                    </div>
                    {move || {
                        domains
                            .items()
                            .into_iter()
                            .map(|domain| {
                                view! {
                                    <div class="workspace-data-table-row">
                                        <span>{domain.domain}</span>
                                        <span>{domain.comment}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </WorkspaceTable>
            </div>
        </div>
    }
}
