//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use overlay::PanelCore;

use crate::pages::viewer::ViewerPage;
use crate::state::panel::initial_panel;

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

/// Root application component.
///
/// Provides the panel state context and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let panel = RwSignal::new(initial_panel());
    provide_context::<RwSignal<PanelCore>>(panel);

    view! {
        <Stylesheet id="leptos" href="/pkg/docpanel.css"/>
        <Title text="Document viewer"/>

        <Router>
            // Any other path shows the viewer too.
            <Routes fallback=|| view! { <ViewerPage/> }>
                <Route path=StaticSegment("") view=ViewerPage/>
            </Routes>
        </Router>
    }
}
