//! Workspace data view — tabbed, paginated tables of aggregated findings.

use leptos::prelude::*;

use crate::api;
use crate::components::tag::TagList;
use crate::components::workspace_table::WorkspaceTable;
use crate::pages::uuid_param;
use crate::state::table::{TableHandle, use_table};

/// Tabs of the data view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    Domains,
    #[default]
    Hosts,
    Ports,
    Services,
}

const TABS: [(Tab, &str); 4] = [
    (Tab::Domains, "Domains"),
    (Tab::Hosts, "Hosts"),
    (Tab::Ports, "Ports"),
    (Tab::Services, "Services"),
];

/// Aggregated data of one workspace, one paginated table per tab.
///
/// All four tables are created up front so pagination state survives tab
/// switches; each resets on its own when the workspace route param changes.
#[component]
pub fn WorkspaceDataPage() -> impl IntoView {
    let workspace = uuid_param("id");
    let tab = RwSignal::new(Tab::default());

    let domains = use_table(
        move |limit, offset| {
            api::workspaces::domains(workspace.get_untracked(), limit, offset, None)
        },
        move || workspace.get(),
    );
    let hosts = use_table(
        move |limit, offset| api::workspaces::hosts(workspace.get_untracked(), limit, offset),
        move || workspace.get(),
    );
    let ports = use_table(
        move |limit, offset| {
            api::workspaces::ports(workspace.get_untracked(), limit, offset, None)
        },
        move || workspace.get(),
    );
    let services = use_table(
        move |limit, offset| {
            api::workspaces::services(workspace.get_untracked(), limit, offset, None)
        },
        move || workspace.get(),
    );

    view! {
        <div class="workspace-data-page">
            <header class="workspace-data-page__header">
                <h1>"Data"</h1>
                <a
                    class="workspace-data-page__attacks"
                    href=move || format!("/workspace/{}/attacks", workspace.get())
                >
                    "Attacks"
                </a>
            </header>

            <div class="workspace-data-page__selector">
                {TABS
                    .into_iter()
                    .map(|(key, display_name)| {
                        view! {
                            <button
                                class="workspace-data-page__tab pane"
                                class=("workspace-data-page__tab--selected", move || tab.get() == key)
                                on:click=move |_| tab.set(key)
                            >
                                <h3 class="heading">{display_name}</h3>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            {move || match tab.get() {
                Tab::Domains => domains_table(domains).into_any(),
                Tab::Hosts => hosts_table(workspace, hosts).into_any(),
                Tab::Ports => ports_table(ports).into_any(),
                Tab::Services => services_table(services).into_any(),
            }}
        </div>
    }
}

fn domains_table(table: TableHandle<api::models::FullDomain>) -> impl IntoView {
    view! {
        <WorkspaceTable
            page=table.page()
            max_page=table.max_page()
            loading=table.loading()
            error=table.error()
            on_page=Callback::new(move |page| table.set_page(page))
        >
            <div class="workspace-data-table-header">
                <span>"Name"</span>
                <span>"Tags"</span>
                <span>"Comment"</span>
            </div>
            {move || {
                table
                    .items()
                    .into_iter()
                    .map(|domain| {
                        view! {
                            <div class="workspace-data-table-row">
                                <span>{domain.domain}</span>
                                <TagList tags=domain.tags/>
                                <span>{domain.comment}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </WorkspaceTable>
    }
}

fn hosts_table(
    workspace: Signal<uuid::Uuid>,
    table: TableHandle<api::models::FullHost>,
) -> impl IntoView {
    view! {
        <WorkspaceTable
            page=table.page()
            max_page=table.max_page()
            loading=table.loading()
            error=table.error()
            on_page=Callback::new(move |page| table.set_page(page))
        >
            <div class="workspace-data-table-header">
                <span>"IP"</span>
                <span>"Tags"</span>
                <span>"Comment"</span>
            </div>
            {move || {
                table
                    .items()
                    .into_iter()
                    .map(|host| {
                        let href =
                            format!("/workspace/{}/hosts/{}", workspace.get_untracked(), host.uuid);
                        view! {
                            <a class="workspace-data-table-row" href=href>
                                <span>{host.ip_addr}</span>
                                <TagList tags=host.tags/>
                                <span>{host.comment}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </WorkspaceTable>
    }
}

fn ports_table(table: TableHandle<api::models::FullPort>) -> impl IntoView {
    view! {
        <WorkspaceTable
            page=table.page()
            max_page=table.max_page()
            loading=table.loading()
            error=table.error()
            on_page=Callback::new(move |page| table.set_page(page))
        >
            <div class="workspace-data-table-header">
                <span>"Port"</span>
                <span>"Host"</span>
                <span>"Tags"</span>
                <span>"Comment"</span>
            </div>
            {move || {
                table
                    .items()
                    .into_iter()
                    .map(|port| {
                        view! {
                            <div class="workspace-data-table-row">
                                <span>{port.port}</span>
                                <span>{port.host.ip_addr}</span>
                                <TagList tags=port.tags/>
                                <span>{port.comment}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </WorkspaceTable>
    }
}

fn services_table(table: TableHandle<api::models::FullService>) -> impl IntoView {
    view! {
        <WorkspaceTable
            page=table.page()
            max_page=table.max_page()
            loading=table.loading()
            error=table.error()
            on_page=Callback::new(move |page| table.set_page(page))
        >
            <div class="workspace-data-table-header">
                <span>"Name"</span>
                <span>"Host"</span>
                <span>"Port"</span>
                <span>"Tags"</span>
                <span>"Comment"</span>
            </div>
            {move || {
                table
                    .items()
                    .into_iter()
                    .map(|service| {
                        let port =
                            service.port.map(|port| port.port.to_string()).unwrap_or_default();
                        view! {
                            <div class="workspace-data-table-row">
                                <span>{service.name}</span>
                                <span>{service.host.ip_addr}</span>
                                <span>{port}</span>
                                <TagList tags=service.tags/>
                                <span>{service.comment}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </WorkspaceTable>
    }
}
