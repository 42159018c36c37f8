//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    attacks::WorkspaceAttacksPage, leeches::LeechesPage, workspace_data::WorkspaceDataPage,
    workspace_host::WorkspaceHostPage, workspaces::WorkspacesPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component setting up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/kraken-frontend.css"/>
        <Title text="kraken"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WorkspacesPage/>
                <Route path=StaticSegment("leeches") view=LeechesPage/>
                <Route
                    path=(StaticSegment("workspace"), ParamSegment("id"))
                    view=WorkspaceDataPage
                />
                <Route
                    path=(StaticSegment("workspace"), ParamSegment("id"), StaticSegment("attacks"))
                    view=WorkspaceAttacksPage
                />
                <Route
                    path=(
                        StaticSegment("workspace"),
                        ParamSegment("id"),
                        StaticSegment("hosts"),
                        ParamSegment("host"),
                    )
                    view=WorkspaceHostPage
                />
            </Routes>
        </Router>
    }
}
